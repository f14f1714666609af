//! Application layer errors.
//!
//! These errors represent failures in orchestration, not outline rules.
//! Outline rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The build root could not be created. Fatal for the whole build.
    #[error("Error creating root directory {path}: {reason}")]
    RootCreation { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A directory tree could not be walked.
    #[error("Error accessing path {path}: {reason}")]
    WalkFailed { path: PathBuf, reason: String },

    /// Adapter state is unavailable (lock poisoned).
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootCreation { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions".into(),
                "Choose a different --root".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::WalkFailed { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check that the directory exists and is readable".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootCreation { .. } | Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::WalkFailed { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
