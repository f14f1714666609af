// ============================================================================
// domain/error.rs - OUTLINE DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep copies)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A depth marker with no name after it. `line` is 1-based.
    #[error("line {line} is incomplete")]
    IncompleteLine { line: usize },

    /// A line whose name is empty once markers are stripped. `line` is 1-based.
    #[error("invalid name at line {line}: '{content}'")]
    InvalidName { line: usize, content: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IncompleteLine { line } => vec![
                format!("Line {} has depth markers but no name", line),
                "Type a name after the dashes, or delete the line".into(),
            ],
            Self::InvalidName { content, .. } => vec![
                format!("'{}' does not name a file or directory", content),
                "Use `name.ext` or `name:file` for files, a bare `name` for directories".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompleteLine { .. } | Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
