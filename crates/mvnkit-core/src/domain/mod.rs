// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for mvnkit.
//!
//! Pure data and rules: descriptors, jar manifests, test records, the
//! rendered project structure and the dependency-tree reader. All I/O
//! (files, processes, clocks) happens behind the ports of the application
//! layer.
//!
//! - **No I/O**: nothing here touches the filesystem or spawns processes
//! - **Few crates**: std, `thiserror`, and `serde` derives for the YAML model
//! - **Immutable results**: records and run results cannot be edited after
//!   construction, so summaries always agree with their records
pub mod dependency_tree;
pub mod entities;
pub mod error;

mod validation;

pub use dependency_tree::{Coordinate, DependencyTree};
pub use entities::{
    common::{Permissions, RelativePath},
    descriptor::{
        DEFAULT_GROUP_ID, DEFAULT_JAVA_VERSION, DEFAULT_SERVICE_PORT,
        DEFAULT_SPRING_BOOT_VERSION, DEFAULT_VERSION, LocalDependency, ModuleDescriptor,
        ModuleKind, ProjectDescriptor, TemplateFlavor, default_modules,
    },
    lib_manifest::{COMMON_MODULE_LABEL, JarSources, LibManifest, LibModule, LibScope},
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    render_context::{RenderContext, to_pascal_case},
    test_run::{ELLIPSIS, RECORD_OUTPUT_BUDGET, ReportFormat, RunResult, Summary, TestRecord, truncate},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
