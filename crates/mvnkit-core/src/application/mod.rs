//! Application layer for mvnkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (generate, manage jars, run tests,
//!   write reports)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CopyReport, DEFAULT_EXPECTED_DEPENDENCY, GeneratorService, LibRunReport, LibService,
    MaterializeReport, POM_CONFIG_FILE, REPORT_DIR, ReportService, SkippedJar, SuiteConfig,
    TestService,
};

pub use ports::{
    BuildInvoker, Clock, Filesystem, Invocation, LibDocsRenderer, ProjectRenderer,
    ReportRenderer,
};

pub use error::ApplicationError;
