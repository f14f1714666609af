use std::path::{Path, PathBuf};

/// Materialized ancestor directories, indexed by depth.
///
/// Index 0 is the build root. Only directories that were actually created
/// are pushed, so every entry is guaranteed to exist on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStack {
    entries: Vec<PathBuf>,
}

impl PathStack {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            entries: vec![root.into()],
        }
    }

    /// Deepest depth a line can currently attach at.
    pub fn max_depth(&self) -> usize {
        self.entries.len() - 1
    }

    /// Re-anchor at `depth` and return the parent for an entry there.
    ///
    /// `depth` is clamped to [`Self::max_depth`]; everything deeper is
    /// discarded.
    pub fn anchor(&mut self, depth: usize) -> &Path {
        let depth = depth.min(self.max_depth());
        self.entries.truncate(depth + 1);
        self.parent()
    }

    /// Directory new entries currently land in.
    pub fn parent(&self) -> &Path {
        // The root is never popped.
        &self.entries[self.entries.len() - 1]
    }

    pub fn push(&mut self, dir: impl Into<PathBuf>) {
        self.entries.push(dir.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let stack = PathStack::new("/out");
        assert_eq!(stack.parent(), Path::new("/out"));
        assert_eq!(stack.max_depth(), 0);
    }

    #[test]
    fn deep_jump_clamps_to_deepest_ancestor() {
        let mut stack = PathStack::new("/out");
        stack.push("/out/a");
        assert_eq!(stack.anchor(3), Path::new("/out/a"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn shallower_depth_truncates() {
        let mut stack = PathStack::new("/out");
        stack.push("/out/a");
        stack.push("/out/a/b");
        assert_eq!(stack.anchor(1), Path::new("/out/a"));
        assert_eq!(stack.anchor(0), Path::new("/out"));
        assert_eq!(stack.len(), 1);
        assert!(!stack.is_empty());
    }
}
