use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::outline::{EntryKind, format_line};

/// One walked filesystem entry, relative to the walk root.
///
/// Invariant: `path` is relative and non-empty. The root itself is never an
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    path: PathBuf,
    kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::File)
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Number of separators in the relative path.
    pub fn depth(&self) -> usize {
        self.path.components().count().saturating_sub(1)
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// True when any component of the path starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.path.components().any(|c| match c {
            Component::Normal(part) => part.to_string_lossy().starts_with('.'),
            _ => false,
        })
    }

    /// This entry in outline notation.
    pub fn to_outline_line(&self) -> String {
        format_line(self.depth(), &self.name(), self.kind)
    }
}

/// Render entries back into outline notation, one line each.
///
/// Entries are expected in walk order (pre-order, sorted within a
/// directory). Without `include_hidden`, every entry with a hidden
/// component is dropped, which removes hidden directories together with
/// their subtrees.
pub fn render_outline(entries: &[TreeEntry], include_hidden: bool) -> String {
    entries
        .iter()
        .filter(|e| include_hidden || !e.is_hidden())
        .map(|e| e.to_outline_line() + "\n")
        .collect()
}

/// Human-readable listing with two spaces of indent per level.
pub fn render_indented(entries: &[TreeEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}{}\n", "  ".repeat(e.depth()), e.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeEntry> {
        vec![
            TreeEntry::directory(".git"),
            TreeEntry::file(".git/HEAD"),
            TreeEntry::file(".gitignore"),
            TreeEntry::file("Makefile"),
            TreeEntry::file("README.md"),
            TreeEntry::directory("src"),
            TreeEntry::file("src/.env"),
            TreeEntry::directory("src/internal"),
            TreeEntry::file("src/internal/tree.go"),
            TreeEntry::file("src/main.go"),
        ]
    }

    #[test]
    fn depth_counts_separators() {
        assert_eq!(TreeEntry::file("README.md").depth(), 0);
        assert_eq!(TreeEntry::file("src/internal/tree.go").depth(), 2);
    }

    #[test]
    fn hidden_detection_looks_at_every_component() {
        assert!(TreeEntry::file(".git/HEAD").is_hidden());
        assert!(TreeEntry::file("src/.env").is_hidden());
        assert!(!TreeEntry::file("src/main.go").is_hidden());
    }

    #[test]
    fn outline_without_hidden_entries() {
        let text = render_outline(&sample(), false);
        assert_eq!(
            text,
            "Makefile:file\nREADME.md\nsrc\n-internal\n--tree.go\n-main.go\n"
        );
    }

    #[test]
    fn outline_with_hidden_entries() {
        let text = render_outline(&sample(), true);
        assert!(text.starts_with(".git\n-HEAD:file\n.gitignore\n"));
        assert!(text.contains("-.env\n"));
    }

    #[test]
    fn indented_listing_uses_two_spaces() {
        let entries = vec![
            TreeEntry::directory("src"),
            TreeEntry::file("src/main.go"),
            TreeEntry::file("README.md"),
        ];
        assert_eq!(render_indented(&entries), "src\n  main.go\nREADME.md\n");
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_outline(&[], true), "");
        assert_eq!(render_indented(&[]), "");
    }
}
