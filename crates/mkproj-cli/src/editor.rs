//! Full-screen outline editor on top of `console::Term`.
//!
//! All editing rules live in [`LineBuffer`]; this module only maps keys to
//! buffer operations and paints the screen.

use std::io;
use std::path::Path;

use console::{Key, Term};
use mkproj_core::domain::LineBuffer;
use tracing::{debug, trace};

use crate::error::{CliError, CliResult};

/// Ctrl-S as delivered in raw mode.
const CTRL_S: char = '\u{13}';

/// Rows above the first outline line.
const HEADER_ROWS: usize = 2;

/// How an editing session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The outline passed validation and should be built.
    Commit(Vec<String>),
    /// The user left with Escape.
    Quit,
}

/// Effect of a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Edited,
    /// The key was refused; the message goes to the status line.
    Rejected(String),
    Commit,
    Quit,
    Interrupt,
}

/// Apply `key` to `buffer`.
pub fn apply_key(buffer: &mut LineBuffer, key: Key) -> KeyAction {
    match key {
        Key::Char(CTRL_S) => KeyAction::Commit,
        Key::UnknownEscSeq(ref seq) if is_f2(seq) => KeyAction::Commit,
        Key::Escape => KeyAction::Quit,
        Key::CtrlC => KeyAction::Interrupt,
        Key::Tab => {
            buffer.indent();
            KeyAction::Edited
        }
        Key::Enter => match buffer.newline() {
            Ok(()) => KeyAction::Edited,
            Err(_) => KeyAction::Rejected("Cannot add a new line after an incomplete line.".into()),
        },
        Key::Backspace => {
            buffer.backspace();
            KeyAction::Edited
        }
        Key::Del => {
            buffer.delete();
            KeyAction::Edited
        }
        Key::ArrowLeft => {
            buffer.move_left();
            KeyAction::Edited
        }
        Key::ArrowRight => {
            buffer.move_right();
            KeyAction::Edited
        }
        Key::ArrowUp => {
            buffer.move_up();
            KeyAction::Edited
        }
        Key::ArrowDown => {
            buffer.move_down();
            KeyAction::Edited
        }
        Key::Char(ch) if !ch.is_control() => {
            buffer.insert_char(ch);
            KeyAction::Edited
        }
        _ => KeyAction::Edited,
    }
}

fn is_f2(seq: &[char]) -> bool {
    seq.ends_with(&['O', 'Q']) || seq == ['[', '1', '2', '~']
}

/// Interactive session bound to a terminal.
pub struct Editor<'a> {
    term: Term,
    root: &'a Path,
    status: String,
}

impl<'a> Editor<'a> {
    /// Attach to `term`, which must be an interactive terminal.
    pub fn new(term: Term, root: &'a Path) -> CliResult<Self> {
        if !term.is_term() {
            return Err(CliError::Terminal {
                message: "standard output is not a terminal".into(),
                source: None,
            });
        }
        Ok(Self {
            term,
            root,
            status: String::new(),
        })
    }

    /// Run until the outline is committed or the user leaves.
    pub fn run(mut self, mut buffer: LineBuffer) -> CliResult<EditorOutcome> {
        let outcome = loop {
            self.paint(&buffer).map_err(terminal_error)?;
            let key = self.term.read_key().map_err(terminal_error)?;
            trace!(?key, "Key pressed");

            match apply_key(&mut buffer, key) {
                KeyAction::Edited => self.status.clear(),
                KeyAction::Rejected(message) => self.status = message,
                KeyAction::Commit => match buffer.validate() {
                    Ok(()) => break EditorOutcome::Commit(buffer.into_lines()),
                    Err(e) => self.status = format!("Cannot build: {e}"),
                },
                KeyAction::Quit => break EditorOutcome::Quit,
                KeyAction::Interrupt => {
                    self.term.clear_screen().map_err(terminal_error)?;
                    return Err(CliError::Cancelled);
                }
            }
        };

        self.term.clear_screen().map_err(terminal_error)?;
        debug!(?outcome, "Editor closed");
        Ok(outcome)
    }

    fn paint(&self, buffer: &LineBuffer) -> io::Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&format!(
            "mkproj: {}   [Tab] indent  [Enter] new line  [Ctrl-S/F2] build  [Esc] quit",
            self.root.display()
        ))?;
        self.term.write_line(&self.status)?;
        for line in buffer.lines() {
            self.term.write_line(line)?;
        }

        let cursor = buffer.cursor();
        self.term.move_cursor_to(cursor.col, cursor.row + HEADER_ROWS)?;
        self.term.flush()
    }
}

fn terminal_error(e: io::Error) -> CliError {
    CliError::Terminal {
        message: e.to_string(),
        source: Some(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(buffer: &mut LineBuffer, text: &str) {
        for ch in text.chars() {
            apply_key(buffer, Key::Char(ch));
        }
    }

    #[test]
    fn typing_and_enter_build_lines() {
        let mut buffer = LineBuffer::new();
        type_text(&mut buffer, "src");
        assert_eq!(apply_key(&mut buffer, Key::Enter), KeyAction::Edited);
        apply_key(&mut buffer, Key::Tab);
        type_text(&mut buffer, "main.go");

        assert_eq!(buffer.lines(), ["src", "-main.go"]);
    }

    #[test]
    fn tab_is_clamped_by_previous_file() {
        let mut buffer = LineBuffer::new();
        type_text(&mut buffer, "README.md");
        apply_key(&mut buffer, Key::Enter);
        apply_key(&mut buffer, Key::Tab);
        type_text(&mut buffer, "x");

        assert_eq!(buffer.lines()[1], "x");
    }

    #[test]
    fn enter_after_incomplete_line_is_rejected() {
        let mut buffer = LineBuffer::new();
        apply_key(&mut buffer, Key::Tab);

        let action = apply_key(&mut buffer, Key::Enter);
        assert!(matches!(action, KeyAction::Rejected(_)));
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn commit_and_quit_keys() {
        let mut buffer = LineBuffer::new();
        assert_eq!(apply_key(&mut buffer, Key::Char(CTRL_S)), KeyAction::Commit);
        assert_eq!(
            apply_key(&mut buffer, Key::UnknownEscSeq(vec!['O', 'Q'])),
            KeyAction::Commit
        );
        assert_eq!(apply_key(&mut buffer, Key::Escape), KeyAction::Quit);
        assert_eq!(apply_key(&mut buffer, Key::CtrlC), KeyAction::Interrupt);
    }

    #[test]
    fn control_characters_are_not_inserted() {
        let mut buffer = LineBuffer::new();
        apply_key(&mut buffer, Key::Char('\u{1}'));
        assert_eq!(buffer.lines(), [""]);
    }

    #[test]
    fn backspace_and_arrows_edit_in_place() {
        let mut buffer = LineBuffer::new();
        type_text(&mut buffer, "docz");
        apply_key(&mut buffer, Key::Backspace);
        type_text(&mut buffer, "s");
        apply_key(&mut buffer, Key::ArrowLeft);
        apply_key(&mut buffer, Key::ArrowLeft);
        apply_key(&mut buffer, Key::Del);

        assert_eq!(buffer.lines(), ["dos"]);
    }
}
