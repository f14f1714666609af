//! Outline input: files and piped standard input.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use mkproj_core::{application::ApplicationError, error::MkprojResult};
use tracing::debug;

/// How lines are kept when reading an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Keep each line as written, minus its line ending.
    #[default]
    Verbatim,
    /// Trim surrounding whitespace from each line.
    Trimmed,
}

/// Read every line of `reader`.
///
/// A final line without a trailing newline is kept.
pub fn read_outline<R: BufRead>(reader: R, mode: LineMode) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|l| match mode {
                LineMode::Verbatim => l,
                LineMode::Trimmed => l.trim().to_string(),
            })
        })
        .collect()
}

/// Read an outline file verbatim.
pub fn read_outline_file(path: &Path) -> MkprojResult<Vec<String>> {
    let to_error = |e: io::Error| ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::open(path).map_err(to_error)?;
    let lines = read_outline(BufReader::new(file), LineMode::Verbatim).map_err(to_error)?;
    debug!(path = %path.display(), lines = lines.len(), "Read outline file");
    Ok(lines)
}

/// True when standard input is not a terminal.
pub fn stdin_is_piped() -> bool {
    !io::stdin().is_terminal()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn final_line_without_newline_is_kept() {
        let lines = read_outline(Cursor::new("src\n-main.go"), LineMode::Verbatim).unwrap();
        assert_eq!(lines, vec!["src", "-main.go"]);
    }

    #[test]
    fn crlf_endings_are_removed() {
        let lines = read_outline(Cursor::new("a\r\n-b\r\n"), LineMode::Verbatim).unwrap();
        assert_eq!(lines, vec!["a", "-b"]);
    }

    #[test]
    fn trimmed_mode_strips_whitespace() {
        let lines = read_outline(Cursor::new("  src  \n\t-x.rs \n"), LineMode::Trimmed).unwrap();
        assert_eq!(lines, vec!["src", "-x.rs"]);
    }

    #[test]
    fn empty_lines_survive_reading() {
        let lines = read_outline(Cursor::new("a\n\nb\n"), LineMode::Verbatim).unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn missing_file_is_a_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_outline_file(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn file_is_read_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.txt");
        std::fs::write(&path, "docs\n -guide.md \n\t-notes\n").unwrap();
        assert_eq!(
            read_outline_file(&path).unwrap(),
            vec!["docs", " -guide.md ", "\t-notes"]
        );
    }
}
