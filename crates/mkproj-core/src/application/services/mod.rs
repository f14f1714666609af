//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build this outline" or "render this tree".

pub mod build_service;
pub mod tree_service;

pub use build_service::BuildService;
pub use tree_service::TreeService;

use crate::{application::ApplicationError, error::MkprojError};

/// The underlying cause of a port failure, without the layer prefixes.
pub(crate) fn failure_reason(err: &MkprojError) -> String {
    match err {
        MkprojError::Application(ApplicationError::FilesystemError { reason, .. })
        | MkprojError::Application(ApplicationError::WalkFailed { reason, .. }) => reason.clone(),
        other => other.to_string(),
    }
}
