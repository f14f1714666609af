//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use mkproj_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{EntryKind, TreeEntry},
    error::MkprojResult,
};

/// In-memory filesystem.
///
/// Mirrors the local adapter's semantics: no implicit parents, no
/// overwrites. Paths registered with [`deny`](Self::deny) refuse creation,
/// which lets tests inject failures at chosen lines.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    entries: BTreeMap<PathBuf, EntryKind>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Make every later creation at `path` fail.
    pub fn deny(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.into());
        }
    }

    /// Kind of the entry at `path`, if any.
    pub fn kind(&self, path: &Path) -> Option<EntryKind> {
        let inner = self.inner.read().ok()?;
        inner.entries.get(path).copied()
    }

    /// Check if a file exists at `path`.
    pub fn is_file(&self, path: &Path) -> bool {
        self.kind(path).is_some_and(EntryKind::is_file)
    }

    fn insert(&self, path: &Path, kind: EntryKind) -> MkprojResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let refuse = |reason: &str| -> MkprojResult<()> {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into())
        };

        if inner.denied.contains(path) {
            return refuse("permission denied");
        }
        if inner.entries.contains_key(path) {
            return refuse("entry already exists");
        }
        if let Some(parent) = path.parent() {
            let parent_is_dir = parent.as_os_str().is_empty()
                || inner.entries.get(parent) == Some(&EntryKind::Directory);
            if !parent_is_dir {
                return refuse("parent directory does not exist");
            }
        }

        inner.entries.insert(path.to_path_buf(), kind);
        Ok(())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> MkprojResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.denied.contains(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "permission denied".into(),
                }
                .into());
            }
            match inner.entries.get(&current).copied() {
                Some(EntryKind::File) => {
                    return Err(ApplicationError::FilesystemError {
                        path: current,
                        reason: "not a directory".into(),
                    }
                    .into());
                }
                Some(EntryKind::Directory) => {}
                None => {
                    inner.entries.insert(current.clone(), EntryKind::Directory);
                }
            }
        }

        Ok(())
    }

    fn create_dir(&self, path: &Path) -> MkprojResult<()> {
        self.insert(path, EntryKind::Directory)
    }

    fn create_file(&self, path: &Path) -> MkprojResult<()> {
        self.insert(path, EntryKind::File)
    }

    fn exists(&self, path: &Path) -> bool {
        self.kind(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind(path).is_some_and(EntryKind::is_directory)
    }

    fn walk(&self, root: &Path, include_hidden: bool) -> MkprojResult<Vec<TreeEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.entries.get(root) != Some(&EntryKind::Directory) {
            return Err(ApplicationError::WalkFailed {
                path: root.to_path_buf(),
                reason: "no such directory".into(),
            }
            .into());
        }

        // BTreeMap orders paths component by component, which is pre-order.
        // A hidden component anywhere below root drops its whole subtree.
        Ok(inner
            .entries
            .range::<Path, _>((std::ops::Bound::Excluded(root), std::ops::Bound::Unbounded))
            .take_while(|(path, _)| path.starts_with(root))
            .filter_map(|(path, kind)| {
                path.strip_prefix(root)
                    .ok()
                    .map(|relative| TreeEntry::new(relative, *kind))
            })
            .filter(|entry| include_hidden || !entry.is_hidden())
            .collect())
    }
}
