// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mkproj.
//!
//! This module contains pure logic with ZERO I/O. Filesystem access is
//! handled via the `Filesystem` port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or terminal calls
//! - **Shared notation**: The line buffer and the build service both
//!   classify lines through `outline`
//!
// Public API - what the world sees
pub mod error;
pub mod line_buffer;
pub mod outline;
pub mod path_stack;
pub mod report;
pub mod tree;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use line_buffer::{Cursor, LineBuffer};
pub use outline::{
    DEPTH_MARKER, DepthClamp, EntryKind, FILE_MARKER, LineClass, clamp_depths, clamp_line,
    classify_line, count_leading_depth, format_line, is_line_incomplete, max_allowed_depth,
    previous_entry, trim_line_ending, validate_outline,
};
pub use path_stack::PathStack;
pub use report::{BuildReport, LineOutcome};
pub use tree::{TreeEntry, render_indented, render_outline};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module properties
    // ========================================================================

    #[test]
    fn rendered_tree_reclassifies_to_same_kinds() {
        let entries = vec![
            TreeEntry::directory("cmd"),
            TreeEntry::directory("cmd/mkproj"),
            TreeEntry::file("cmd/mkproj/main.go"),
            TreeEntry::file("LICENSE"),
            TreeEntry::file("go.mod"),
        ];

        let text = render_outline(&entries, false);
        let classes: Vec<LineClass> = text.lines().map(classify_line).collect();

        for (entry, class) in entries.iter().zip(&classes) {
            assert_eq!(entry.kind(), class.kind, "kind mismatch for {:?}", entry.path());
            assert_eq!(entry.name(), class.name);
            assert_eq!(entry.depth(), class.depth);
        }
    }

    #[test]
    fn rendered_tree_is_already_clamped() {
        let entries = vec![
            TreeEntry::directory("a"),
            TreeEntry::directory("a/b"),
            TreeEntry::file("a/b/c.txt"),
            TreeEntry::file("a/d.txt"),
            TreeEntry::file("e.txt"),
        ];
        let text = render_outline(&entries, false);
        let lines: Vec<&str> = text.lines().collect();
        let literal: Vec<Option<usize>> = lines.iter().map(|l| Some(count_leading_depth(l))).collect();
        assert_eq!(clamp_depths(&lines), literal);
    }

    #[test]
    fn line_buffer_agrees_with_clamp_depths() {
        let raw = ["src", "----main.go", "---lib", "internal", "-----x.rs"];
        let buffer = LineBuffer::from_lines(raw);
        let clamped: Vec<Option<usize>> = buffer
            .lines()
            .iter()
            .map(|l| Some(count_leading_depth(l)))
            .collect();
        assert_eq!(clamped, clamp_depths(&raw));
    }
}
