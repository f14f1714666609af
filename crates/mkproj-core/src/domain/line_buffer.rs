//! Headless line-buffer editing model.
//!
//! [`LineBuffer`] is what an interactive front-end drives: it owns the lines
//! and a cursor, applies key-level edits, and keeps the line under the
//! cursor within the depth the outline allows. It knows nothing about
//! terminals; rendering is the caller's job.

use crate::domain::error::DomainError;
use crate::domain::outline::{
    DEPTH_MARKER, clamp_line, is_line_incomplete, max_allowed_depth, previous_entry,
    validate_outline,
};

/// Cursor position. `col` counts characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Editable outline with a cursor.
///
/// Invariant: there is always at least one line, and the cursor always
/// points inside the buffer (`col` may equal the line length).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// A buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
        }
    }

    /// Start from existing lines, clamping each to the depth it may take.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self {
            lines: lines.into_iter().map(Into::into).collect(),
            cursor: Cursor::default(),
        };
        if buffer.lines.is_empty() {
            buffer.lines.push(String::new());
        }
        for row in 0..buffer.lines.len() {
            buffer.enforce_depth(row);
        }
        buffer
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_line(&self) -> &str {
        &self.lines[self.cursor.row]
    }

    /// Pre-commit validation hook.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_outline(&self.lines)
    }

    /// Depth the line under the cursor may declare.
    pub fn max_depth_here(&self) -> usize {
        max_allowed_depth(previous_entry(&self.lines, self.cursor.row))
    }

    // ── Editing ───────────────────────────────────────────────────────────

    /// Insert a character at the cursor.
    ///
    /// Spaces are ignored and tabs become depth markers.
    pub fn insert_char(&mut self, ch: char) {
        let ch = match ch {
            ' ' => return,
            '\t' => DEPTH_MARKER,
            other => other,
        };
        self.clamp_col();
        let Cursor { row, col } = self.cursor;
        let at = byte_offset(&self.lines[row], col);
        self.lines[row].insert(at, ch);
        self.cursor.col += 1;
        self.settle();
    }

    /// Insert one depth marker at the cursor.
    pub fn indent(&mut self) {
        self.insert_char(DEPTH_MARKER);
    }

    /// Delete the character before the cursor, or join with the line above.
    pub fn backspace(&mut self) {
        self.clamp_col();
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let at = byte_offset(&self.lines[row], col - 1);
            self.lines[row].remove(at);
            self.cursor.col -= 1;
        } else if row > 0 {
            let line = self.lines.remove(row);
            let previous = &mut self.lines[row - 1];
            self.cursor = Cursor {
                row: row - 1,
                col: previous.chars().count(),
            };
            previous.push_str(&line);
        }
        self.settle();
    }

    /// Delete the character under the cursor, or join the line below.
    pub fn delete(&mut self) {
        self.clamp_col();
        let Cursor { row, col } = self.cursor;
        if col < char_len(&self.lines[row]) {
            let at = byte_offset(&self.lines[row], col);
            self.lines[row].remove(at);
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
        }
        self.settle();
    }

    /// Split the line at the cursor.
    ///
    /// Refused while the current line is incomplete, so a dangling depth
    /// marker can never be followed by another entry.
    pub fn newline(&mut self) -> Result<(), DomainError> {
        self.clamp_col();
        let Cursor { row, col } = self.cursor;
        if is_line_incomplete(&self.lines[row]) {
            return Err(DomainError::IncompleteLine { line: row + 1 });
        }
        let at = byte_offset(&self.lines[row], col);
        let rest = self.lines[row].split_off(at);
        self.lines.insert(row + 1, rest);
        self.cursor = Cursor { row: row + 1, col: 0 };
        self.settle();
        Ok(())
    }

    // ── Navigation ────────────────────────────────────────────────────────

    pub fn move_left(&mut self) {
        self.clamp_col();
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = char_len(&self.lines[self.cursor.row]);
        }
        self.settle();
    }

    pub fn move_right(&mut self) {
        self.clamp_col();
        if self.cursor.col < char_len(self.current_line()) {
            self.cursor.col += 1;
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
            self.cursor.col = 0;
        }
        self.settle();
    }

    pub fn move_up(&mut self) {
        if self.cursor.row > 0 {
            self.cursor.row -= 1;
        }
        self.settle();
    }

    pub fn move_down(&mut self) {
        if self.cursor.row + 1 < self.lines.len() {
            self.cursor.row += 1;
        }
        self.settle();
    }

    // ── Internal Helpers ──────────────────────────────────────────────────

    /// Re-clamp the current line and keep the cursor on it.
    fn settle(&mut self) {
        let row = self.cursor.row;
        let removed = self.enforce_depth(row);
        self.cursor.col = self.cursor.col.saturating_sub(removed);
        self.clamp_col();
    }

    /// Clamp `row` to its allowed depth, returning how many leading
    /// characters were dropped.
    fn enforce_depth(&mut self, row: usize) -> usize {
        let max = max_allowed_depth(previous_entry(&self.lines, row));
        let before = char_len(&self.lines[row]);
        self.lines[row] = clamp_line(&self.lines[row], max);
        before.saturating_sub(char_len(&self.lines[row]))
    }

    fn clamp_col(&mut self) {
        let len = char_len(&self.lines[self.cursor.row]);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(index, _)| index)
}
