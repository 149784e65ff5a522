//! Root error of the core crate.
//!
//! Every fallible core or adapter operation returns [`MvnkitResult`]. The
//! CLI turns the [`ErrorCategory`] into an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum MvnkitError {
    /// A descriptor or manifest broke a rule.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Loading, rendering, or writing failed.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl MvnkitError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification shared by every core error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

pub type MvnkitResult<T> = Result<T, MvnkitError>;
