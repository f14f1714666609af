//! The outline notation.
//!
//! One entry per line. Leading `-` characters encode depth (spaces and tabs
//! between them are skipped when counting). The name is what remains once
//! the leading run of `-` is removed and the result trimmed. A trailing
//! `:file` marker forces a file, and a name containing `.` is a file too.
//! Everything else is a directory.
//!
//! ```text
//! src
//! -main.go
//! -internal
//! --tree.go
//! Makefile:file
//! README.md
//! ```
//!
//! Every function here is pure. The line buffer (for live clamping) and the
//! build service (for materialization) both go through this module, so the
//! two can never disagree about what a line means.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Character that encodes one level of depth.
pub const DEPTH_MARKER: char = '-';

/// Suffix that forces a file for names without an extension.
pub const FILE_MARKER: &str = ":file";

/// What a line (or a walked path) materializes as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_file(self) -> bool {
        matches!(self, Self::File)
    }

    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}

/// Classification of a single outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub depth: usize,
    pub kind: EntryKind,
    pub name: String,
}

impl LineClass {
    /// A line with an empty name cannot be materialized.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Deepest depth the next entry may take if this line sits at `depth`.
    ///
    /// Only a real directory opens a new level. Files and nameless lines are
    /// leaves; the next entry can at most be their sibling.
    pub fn ceiling_at(&self, depth: usize) -> usize {
        if self.is_valid() && self.kind.is_directory() {
            depth + 1
        } else {
            depth
        }
    }
}

/// Count the depth markers at the start of `line`.
///
/// Spaces and tabs are skipped without counting; any other character ends
/// the scan.
pub fn count_leading_depth(line: &str) -> usize {
    let mut depth = 0;
    for c in line.chars() {
        match c {
            DEPTH_MARKER => depth += 1,
            ' ' | '\t' => continue,
            _ => break,
        }
    }
    depth
}

/// Classify a line into depth, kind and name.
///
/// The name is empty when the line holds nothing but markers; callers must
/// check [`LineClass::is_valid`].
pub fn classify_line(line: &str) -> LineClass {
    let depth = count_leading_depth(line);
    let name = strip_depth(line);

    if let Some(stripped) = name.strip_suffix(FILE_MARKER) {
        return LineClass {
            depth,
            kind: EntryKind::File,
            name: stripped.trim_end().to_string(),
        };
    }

    let kind = if name.contains('.') {
        EntryKind::File
    } else {
        EntryKind::Directory
    };

    LineClass {
        depth,
        kind,
        name: name.to_string(),
    }
}

/// A depth marker with no name following it.
pub fn is_line_incomplete(line: &str) -> bool {
    strip_depth(line).is_empty()
}

/// Depth a new line may declare, given the nearest previous non-empty line.
pub fn max_allowed_depth(previous: Option<&str>) -> usize {
    previous.map_or(0, |line| {
        let class = classify_line(line);
        class.ceiling_at(class.depth)
    })
}

/// Nearest line before `index` that is not empty.
pub fn previous_entry<S: AsRef<str>>(lines: &[S], index: usize) -> Option<&str> {
    lines[..index.min(lines.len())]
        .iter()
        .rev()
        .map(|line| line.as_ref())
        .find(|line| !is_blank(line))
}

/// Fail on the first incomplete line (1-based in the error).
///
/// An empty outline is valid.
pub fn validate_outline<S: AsRef<str>>(lines: &[S]) -> Result<(), DomainError> {
    match lines.iter().position(|l| is_line_incomplete(l.as_ref())) {
        Some(index) => Err(DomainError::IncompleteLine { line: index + 1 }),
        None => Ok(()),
    }
}

/// Render one entry in outline notation.
pub fn format_line(depth: usize, name: &str, kind: EntryKind) -> String {
    let mut line = DEPTH_MARKER.to_string().repeat(depth);
    line.push_str(name);
    if kind.is_file() && !name.contains('.') {
        line.push_str(FILE_MARKER);
    }
    line
}

/// Rewrite `line` so it declares at most `max_depth` levels.
///
/// Leading spaces are dropped and tabs become depth markers first.
pub fn clamp_line(line: &str, max_depth: usize) -> String {
    let line = line.trim_start_matches(' ').replace('\t', "-");
    if count_leading_depth(&line) <= max_depth {
        return line;
    }
    let rest = line.trim_start_matches(DEPTH_MARKER);
    format!("{}{}", DEPTH_MARKER.to_string().repeat(max_depth), rest)
}

/// Effective depth of every line under the clamping rule; `None` for empty
/// lines.
pub fn clamp_depths<S: AsRef<str>>(lines: &[S]) -> Vec<Option<usize>> {
    let mut clamp = DepthClamp::new();
    lines.iter().map(|l| clamp.place(l.as_ref())).collect()
}

/// Running application of the clamping rule over an outline.
///
/// A line may nest one level below the nearest preceding directory, or sit
/// level with the nearest preceding leaf. Empty lines do not move the
/// ceiling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthClamp {
    ceiling: usize,
}

impl DepthClamp {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deepest depth the next line may take.
    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Place `line`, returning its effective depth.
    pub fn place(&mut self, line: &str) -> Option<usize> {
        if is_blank(line) {
            return None;
        }
        let class = classify_line(line);
        let depth = class.depth.min(self.ceiling);
        self.ceiling = class.ceiling_at(depth);
        Some(depth)
    }
}

/// Strip trailing line-ending characters.
pub fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

fn is_blank(line: &str) -> bool {
    trim_line_ending(line).is_empty()
}

fn strip_depth(line: &str) -> &str {
    line.trim_start_matches(DEPTH_MARKER).trim()
}
