pub mod common;
pub mod descriptor;
pub mod lib_manifest;
pub mod project_structure;
pub mod render_context;
pub mod test_run;

pub use crate::domain::DomainError;
pub use descriptor::{LocalDependency, ModuleDescriptor, ModuleKind, ProjectDescriptor, TemplateFlavor};
pub use lib_manifest::{JarSources, LibManifest, LibModule, LibScope};
pub use project_structure::ProjectStructure;
pub use render_context::RenderContext;
pub use test_run::{ReportFormat, RunResult, Summary, TestRecord};
