//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mvnkit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{
    LibManifest, LibModule, ProjectDescriptor, ProjectStructure, ReportFormat, RunResult,
};
use crate::error::MvnkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mvnkit_adapters::filesystem::LocalFilesystem` (production)
/// - `mvnkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Writes always overwrite; creating an existing directory is not an error.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> MvnkitResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> MvnkitResult<()>;

    /// Copy a file, replacing the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> MvnkitResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> MvnkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for turning a descriptor into the files of a project.
///
/// Implemented by `mvnkit_adapters::renderer::MavenRenderer`.
pub trait ProjectRenderer: Send + Sync {
    /// Pure: the same descriptor always yields the same structure.
    fn render(&self, descriptor: &ProjectDescriptor) -> MvnkitResult<ProjectStructure>;
}

/// Port for the documents the lib manager writes.
pub trait LibDocsRenderer: Send + Sync {
    /// The `<maven-configs>` document covering every manifest entry.
    fn pom_config(&self, manifest: &LibManifest) -> String;

    /// README for one lib directory.
    fn readme(&self, module: &LibModule) -> String;
}

/// Outcome of one external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub succeeded: bool,
    /// stdout followed by stderr, or the spawn error text.
    pub output: String,
}

impl Invocation {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            output: output.into(),
        }
    }

    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            output: output.into(),
        }
    }
}

/// Port for running the external build tool.
///
/// Implemented by:
/// - `mvnkit_adapters::process::ProcessInvoker` (spawns real processes)
/// - `mvnkit_adapters::process::ScriptedInvoker` (replays canned results)
///
/// Infallible by contract: a command that cannot be started is reported
/// as a failed [`Invocation`] carrying the error text.
#[cfg_attr(test, mockall::automock)]
pub trait BuildInvoker: Send + Sync {
    fn invoke(&self, argv: &[String], cwd: &Path) -> Invocation;
}

/// Port for report rendering.
///
/// Implemented by `JsonReport`, `MarkdownReport` and `HtmlReport` in
/// `mvnkit_adapters::report`.
pub trait ReportRenderer: Send + Sync {
    fn format(&self) -> ReportFormat;

    fn render(&self, result: &RunResult) -> MvnkitResult<String>;
}

/// Port for wall-clock time.
pub trait Clock: Send + Sync {
    /// Timestamp stored in run results, ISO 8601.
    fn timestamp(&self) -> String;

    /// Compact stamp used in report file names, `YYYYmmdd_HHMMSS`.
    fn file_stamp(&self) -> String;
}
