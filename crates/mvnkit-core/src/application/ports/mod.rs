//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `mvnkit-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, file writes and copies
//!   - `ProjectRenderer`: descriptor → project structure
//!   - `LibDocsRenderer`: jar manifest → POM fragments and READMEs
//!   - `BuildInvoker`: runs the external build tool
//!   - `ReportRenderer`: run result → report text
//!   - `Clock`: run timestamps
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    BuildInvoker, Clock, Filesystem, Invocation, LibDocsRenderer, ProjectRenderer,
    ReportRenderer,
};

#[cfg(test)]
pub use output::MockBuildInvoker;
