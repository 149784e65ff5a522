use std::fmt::Write;

use mvnkit_core::{
    application::ports::ReportRenderer,
    domain::{ReportFormat, RunResult, truncate},
    error::MvnkitResult,
};

use super::TITLE;

pub const MARKDOWN_CELL_BUDGET: usize = 50;

/// Summary list, result table and a recommendations section.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReport;

impl ReportRenderer for MarkdownReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn render(&self, result: &RunResult) -> MvnkitResult<String> {
        let summary = result.summary();
        let mut out = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(out, "# {TITLE}\n");
        let _ = writeln!(out, "**Run at**: {}\n", result.timestamp());
        let _ = writeln!(out, "## Summary\n");
        let _ = writeln!(out, "- **Total**: {}", summary.total);
        let _ = writeln!(out, "- **Passed**: {} ✅", summary.passed);
        let _ = writeln!(out, "- **Failed**: {} ❌", summary.failed);
        let _ = writeln!(out, "- **Success rate**: {}\n", summary.success_rate);

        let _ = writeln!(out, "## Results\n");
        let _ = writeln!(out, "| Check | Status | Output |");
        let _ = writeln!(out, "|-------|--------|--------|");
        for record in result.records() {
            let status = if record.passed() { "✅ PASS" } else { "❌ FAIL" };
            let _ = writeln!(
                out,
                "| {} | {} | {} |",
                escape_cell(record.name()),
                status,
                escape_cell(&truncate(record.output(), MARKDOWN_CELL_BUDGET))
            );
        }

        let _ = writeln!(out, "\n## Recommendations\n");
        if summary.all_passed() {
            let _ = writeln!(out, "🎉 All checks passed. The project is wired correctly.");
        } else {
            let _ = writeln!(out, "⚠️ Some checks failed. Things to inspect:\n");
            let _ = writeln!(out, "1. Maven dependency declarations");
            let _ = writeln!(out, "2. Jars present in the local lib directories");
            let _ = writeln!(out, "3. maven-install-plugin configuration");
            let _ = writeln!(out, "4. Dependencies between modules");
        }

        Ok(out)
    }
}

/// Keeps a cell on one table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}
