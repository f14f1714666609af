//! Tree Service - renders existing directories as outlines.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{TreeEntry, render_outline},
    error::MkprojResult,
};

/// Reads directory trees through a [`Filesystem`] port.
pub struct TreeService {
    filesystem: Box<dyn Filesystem>,
}

impl TreeService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Entries under `root` in walk order. Hidden subtrees are not entered
    /// unless `include_hidden` is set.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn entries(&self, root: &Path, include_hidden: bool) -> MkprojResult<Vec<TreeEntry>> {
        if !self.filesystem.is_dir(root) {
            let reason = if self.filesystem.exists(root) {
                "not a directory"
            } else {
                "no such directory"
            };
            return Err(ApplicationError::WalkFailed {
                path: root.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        let entries = self.filesystem.walk(root, include_hidden)?;
        debug!(count = entries.len(), include_hidden, "Walked tree");
        Ok(entries)
    }

    /// Render `root` in outline notation. The output can be fed back to a build.
    pub fn render(&self, root: &Path, include_hidden: bool) -> MkprojResult<String> {
        let entries = self.entries(root, include_hidden)?;
        Ok(render_outline(&entries, include_hidden))
    }
}
