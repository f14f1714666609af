//! Unified error handling for mkproj core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for mkproj core operations.
///
/// This enum wraps all possible errors that can occur when using mkproj-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum MkprojError {
    /// Errors from the domain layer (outline rule violations).
    #[error("Outline error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl MkprojError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in mkproj".into(),
                "Please report it to the mkproj maintainers with the output of `mkproj -vv`".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type MkprojResult<T> = Result<T, MkprojError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> MkprojResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> MkprojResult<T> {
        self.map_err(|e| MkprojError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err: MkprojError = DomainError::IncompleteLine { line: 3 }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("line 3 is incomplete"));
    }

    #[test]
    fn missing_root_is_not_found() {
        let err: MkprojError = ApplicationError::WalkFailed {
            path: PathBuf::from("/nope"),
            reason: "No such file or directory".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let err = result.context("reading outline").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(
            err.to_string(),
            "Internal error: reading outline: boom. This is a bug, please report it."
        );
    }
}
