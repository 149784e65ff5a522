// ============================================================================
// domain/error.rs - DESCRIPTOR RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried through the application layer by value)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Module '{name}' is declared more than once")]
    DuplicateModule { name: String },

    #[error("Invalid module '{module}': {reason}")]
    InvalidModule { module: String, reason: String },

    #[error("Invalid dependency '{artifact}': {reason}")]
    InvalidDependency { artifact: String, reason: String },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Unknown template '{name}' (expected minimal, standard or full)")]
    UnknownTemplate { name: String },

    #[error("Unknown report format '{name}' (expected json, markdown or html)")]
    UnknownReportFormat { name: String },

    // ========================================================================
    // Structure Violations
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Add '{}' to your configuration", field),
                "See `mvnkit generate --help` for an example configuration".into(),
            ],
            Self::InvalidProjectName { name, .. } => vec![
                format!("Project name '{}' cannot be used as a directory name", name),
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: my-project, demo_app, shop2".into(),
            ],
            Self::DuplicateModule { name } => vec![
                format!("Module '{}' appears twice in the module list", name),
                "Give each module a unique name or a different path".into(),
            ],
            Self::InvalidModule { module, .. } => vec![
                format!("Check the declaration of module '{}'", module),
                "Module types are: lib, service, aggregator".into(),
            ],
            Self::InvalidManifest(_) => vec![
                "Check the jar manifest (jars-config.yaml)".into(),
                "Every entry under `modules` needs a module_name and lib_dir".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
