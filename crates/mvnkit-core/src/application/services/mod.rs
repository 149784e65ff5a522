//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "run the test suite".

pub mod generator_service;
pub mod lib_service;
pub mod report_service;
pub mod test_service;

pub use generator_service::{GeneratorService, MaterializeReport};
pub use lib_service::{CopyReport, LibRunReport, LibService, POM_CONFIG_FILE, SkippedJar};
pub use report_service::{REPORT_DIR, ReportService};
pub use test_service::{DEFAULT_EXPECTED_DEPENDENCY, SuiteConfig, TestService};
