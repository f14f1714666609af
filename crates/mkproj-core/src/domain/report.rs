use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::outline::EntryKind;

/// What happened to one non-empty outline line during a build.
///
/// `line` is 1-based and counts every input line, empty ones included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LineOutcome {
    Created {
        line: usize,
        path: PathBuf,
        kind: EntryKind,
    },
    InvalidName {
        line: usize,
        content: String,
    },
    Failed {
        line: usize,
        path: PathBuf,
        kind: EntryKind,
        reason: String,
    },
}

impl LineOutcome {
    pub fn line(&self) -> usize {
        match self {
            Self::Created { line, .. } | Self::InvalidName { line, .. } | Self::Failed { line, .. } => {
                *line
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// The domain error behind an invalid line, if any.
    pub fn as_domain_error(&self) -> Option<DomainError> {
        match self {
            Self::InvalidName { line, content } => Some(DomainError::InvalidName {
                line: *line,
                content: content.clone(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { path, kind, .. } => {
                write!(f, "Created {}: {}", kind, path.display())
            }
            Self::InvalidName { line, content } => {
                write!(f, "Invalid name at line {}: {}", line, content)
            }
            Self::Failed {
                path, kind, reason, ..
            } => write!(f, "Error creating {} {}: {}", kind, path.display(), reason),
        }
    }
}

/// Result of materializing an outline under a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    root: PathBuf,
    outcomes: Vec<LineOutcome>,
    tree: Option<String>,
}

impl BuildReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
            tree: None,
        }
    }

    pub fn record(&mut self, outcome: LineOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_tree(&mut self, tree: String) {
        self.tree = Some(tree);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outcomes(&self) -> &[LineOutcome] {
        &self.outcomes
    }

    /// Indented rendering of the tree as it stands after the build.
    ///
    /// `None` when the root could not be walked afterwards.
    pub fn tree(&self) -> Option<&str> {
        self.tree.as_deref()
    }

    pub fn files_created(&self) -> usize {
        self.count_created(EntryKind::File)
    }

    pub fn directories_created(&self) -> usize {
        self.count_created(EntryKind::Directory)
    }

    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn count_created(&self, wanted: EntryKind) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Created { kind, .. } if *kind == wanted))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> BuildReport {
        let mut r = BuildReport::new("/out");
        r.record(LineOutcome::Created {
            line: 1,
            path: "/out/src".into(),
            kind: EntryKind::Directory,
        });
        r.record(LineOutcome::Created {
            line: 2,
            path: "/out/src/main.go".into(),
            kind: EntryKind::File,
        });
        r.record(LineOutcome::InvalidName {
            line: 4,
            content: "--".into(),
        });
        r.record(LineOutcome::Failed {
            line: 5,
            path: "/out/src".into(),
            kind: EntryKind::Directory,
            reason: "already exists".into(),
        });
        r
    }

    #[test]
    fn counts() {
        let r = report();
        assert_eq!(r.files_created(), 1);
        assert_eq!(r.directories_created(), 1);
        assert_eq!(r.failure_count(), 2);
        assert!(r.has_failures());
        assert_eq!(r.failures().map(LineOutcome::line).collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn messages() {
        let r = report();
        let lines: Vec<String> = r.outcomes().iter().map(ToString::to_string).collect();
        assert_eq!(lines[0], "Created directory: /out/src");
        assert_eq!(lines[1], "Created file: /out/src/main.go");
        assert_eq!(lines[2], "Invalid name at line 4: --");
        assert_eq!(lines[3], "Error creating directory /out/src: already exists");
    }

    #[test]
    fn invalid_line_maps_to_domain_error() {
        let r = report();
        assert_eq!(
            r.outcomes()[2].as_domain_error(),
            Some(DomainError::InvalidName {
                line: 4,
                content: "--".into()
            })
        );
        assert_eq!(r.outcomes()[0].as_domain_error(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["outcomes"][0]["status"], "created");
        assert_eq!(json["outcomes"][0]["kind"], "directory");
        assert_eq!(json["outcomes"][2]["status"], "invalid_name");
        assert!(json["tree"].is_null());
    }
}
