use mvnkit_core::{
    application::{ApplicationError, ports::ReportRenderer},
    domain::{ReportFormat, RunResult},
    error::MvnkitResult,
};

/// Pretty-printed `RunResult`; non-ASCII text is written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport;

impl ReportRenderer for JsonReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, result: &RunResult) -> MvnkitResult<String> {
        serde_json::to_string_pretty(result).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: format!("JSON report: {e}"),
            }
            .into()
        })
    }
}
