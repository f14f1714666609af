//! mkproj Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for mkproj, a
//! tool that builds directory trees from a dash-depth outline and renders
//! existing trees back into the same notation.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            mkproj-cli (CLI)             │
//! │   (create, tree, edit, init, config)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │       (BuildService, TreeService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mkproj-adapters (Infrastructure)    │
//! │  (LocalFilesystem, MemoryFilesystem)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (outline codec, LineBuffer, PathStack)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mkproj_core::application::{BuildService, TreeService};
//! # fn run(filesystem: Box<dyn mkproj_core::application::Filesystem>) -> mkproj_core::error::MkprojResult<()> {
//!
//! let report = BuildService::new(filesystem).build(&["src", "-main.go"], "./out")?;
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{BuildService, Filesystem, TreeService};
    pub use crate::domain::{
        BuildReport, EntryKind, LineBuffer, LineOutcome, TreeEntry, classify_line,
        validate_outline,
    };
    pub use crate::error::{MkprojError, MkprojResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
