//! Infrastructure adapters for mvnkit.
//!
//! This crate implements the ports defined in `mvnkit-core::application::ports`.
//! It contains all external dependencies and I/O operations: the real
//! filesystem, `mvn` processes, the wall clock, YAML loading and the
//! project/report renderers.

pub mod clock;
pub mod config_loader;
pub mod filesystem;
pub mod process;
pub mod renderer;
pub mod report;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use config_loader::{load_descriptor, load_manifest, read_snapshot};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{ProcessInvoker, ScriptedInvoker};
pub use renderer::{LibDocs, MavenRenderer, SNAPSHOT_FILE};
pub use report::{HtmlReport, JsonReport, MarkdownReport, all_renderers, renderer_for};
