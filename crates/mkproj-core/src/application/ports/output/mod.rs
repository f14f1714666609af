//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mkproj-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TreeEntry;
use crate::error::MkprojResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkproj_adapters::filesystem::LocalFilesystem` (production)
/// - `mkproj_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - `create_dir` and `create_file` never create parents; the build service
///   only calls them under directories it has already created
/// - `create_file` fails when anything already exists at the path
/// - `walk` returns entries relative to `root`, pre-order, sorted by name
///   within each directory, excluding `root` itself
/// - with `include_hidden` false, `walk` never descends into an entry whose
///   name starts with `.`; the root itself is always walked
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MkprojResult<()>;

    /// Create a single directory whose parent exists.
    fn create_dir(&self, path: &Path) -> MkprojResult<()>;

    /// Create an empty file whose parent exists.
    fn create_file(&self, path: &Path) -> MkprojResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Walk the tree under `root`.
    fn walk(&self, root: &Path, include_hidden: bool) -> MkprojResult<Vec<TreeEntry>>;
}
