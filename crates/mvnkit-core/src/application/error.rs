//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A configuration file the user pointed at does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration file could not be parsed.
    #[error("Failed to parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// A configuration file parsed but breaks a descriptor rule.
    #[error("Invalid configuration in {path}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: DomainError,
    },

    /// Rendering produced something unusable.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project directory to test does not exist.
    #[error("Project directory not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// In-memory adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("No file at {}", path.display()),
                "Check the path passed with --project-config or --manifest".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the YAML syntax in {}", path.display()),
                "Strings containing ':' or '#' must be quoted".into(),
            ],
            Self::ConfigInvalid { source, .. } => source.suggestions(),
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("No project at {}", path.display()),
                "Generate one first with `mvnkit generate <NAME>`".into(),
                "Or point at an existing project with --project-dir".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } | Self::ConfigParse { .. } | Self::ConfigInvalid { .. } => {
                ErrorCategory::Configuration
            }
            Self::ProjectNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
