//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use mkproj_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{EntryKind, TreeEntry},
    error::{Context, MkprojError, MkprojResult},
};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> MkprojResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn create_dir(&self, path: &Path) -> MkprojResult<()> {
        fs::create_dir(path).map_err(|e| map_io_error(path, e))
    }

    fn create_file(&self, path: &Path) -> MkprojResult<()> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|e| map_io_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk(&self, root: &Path, include_hidden: bool) -> MkprojResult<Vec<TreeEntry>> {
        let mut entries = Vec::new();

        // Hidden directories are pruned, never entered.
        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| include_hidden || !is_hidden(e));

        for entry in walker {
            let entry = entry.map_err(|e| ApplicationError::WalkFailed {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: e.to_string(),
            })?;

            let relative = entry
                .path()
                .strip_prefix(root)
                .context(format!("walked outside {}", root.display()))?;

            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            trace!(path = %relative.display(), %kind, "Walked entry");
            entries.push(TreeEntry::new(relative, kind));
        }

        Ok(entries)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn map_io_error(path: &Path, e: io::Error) -> MkprojError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_file_refuses_existing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "keep me").unwrap();

        let err = LocalFilesystem::new().create_file(&path).unwrap_err();

        assert!(matches!(
            err,
            MkprojError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn create_dir_requires_parent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.create_dir(&dir.path().join("a/b")).is_err());
        assert!(fs.create_dir(&dir.path().join("a")).is_ok());
        assert!(fs.create_dir(&dir.path().join("a/b")).is_ok());
    }

    #[test]
    fn walk_is_sorted_preorder_and_relative() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/bin")).unwrap();
        fs::write(root.join("src/lib.rs"), "").unwrap();
        fs::write(root.join("src/bin/main.rs"), "").unwrap();
        fs::write(root.join("Cargo.toml"), "").unwrap();

        let entries = LocalFilesystem::new().walk(root, true).unwrap();
        let paths: Vec<_> = entries
            .iter()
            .map(|e| e.path().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(
            paths,
            vec!["Cargo.toml", "src", "src/bin", "src/bin/main.rs", "src/lib.rs"]
        );
        assert_eq!(entries[1].kind(), EntryKind::Directory);
        assert_eq!(entries[4].kind(), EntryKind::File);
    }

    #[test]
    fn walk_of_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .walk(&dir.path().join("missing"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            MkprojError::Application(ApplicationError::WalkFailed { .. })
        ));
    }

    #[test]
    fn hidden_entries_are_pruned_unless_requested() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git/objects")).unwrap();
        fs::write(root.join(".git/HEAD"), "").unwrap();
        fs::write(root.join(".env"), "").unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/.keep"), "").unwrap();

        let fs = LocalFilesystem::new();
        let visible: Vec<_> = fs
            .walk(root, false)
            .unwrap()
            .iter()
            .map(|e| e.path().to_string_lossy().into_owned())
            .collect();
        assert_eq!(visible, vec!["src"]);

        assert_eq!(fs.walk(root, true).unwrap().len(), 6);
    }

    #[test]
    fn hidden_root_is_still_walked() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(".config");
        fs::create_dir_all(root.join("app")).unwrap();

        let entries = LocalFilesystem::new().walk(&root, false).unwrap();
        assert_eq!(entries, vec![TreeEntry::directory("app")]);
    }
}
