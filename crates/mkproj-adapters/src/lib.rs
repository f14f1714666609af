//! Infrastructure adapters for mkproj.
//!
//! This crate implements the ports defined in `mkproj-core::application::ports`
//! and reads outlines from files and standard input. All I/O lives here.

pub mod filesystem;
pub mod outline;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use outline::{LineMode, read_outline, read_outline_file, stdin_is_piped};
