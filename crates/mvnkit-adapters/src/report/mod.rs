//! Report renderers.
//!
//! | Format   | Cell budget | Escaping            |
//! |----------|-------------|---------------------|
//! | JSON     | stored output (1000 chars + `...`) | serde_json |
//! | Markdown | 50 chars    | `\|` and line breaks |
//! | HTML     | 100 chars   | `& < > "`           |
//!
//! Text is truncated first and escaped afterwards, so an escape sequence
//! is never cut in half.

mod html;
mod json;
mod markdown;

pub use html::{HTML_CELL_BUDGET, HtmlReport};
pub use json::JsonReport;
pub use markdown::{MARKDOWN_CELL_BUDGET, MarkdownReport};

use mvnkit_core::{application::ports::ReportRenderer, domain::ReportFormat};

/// Renderer for one format.
pub fn renderer_for(format: ReportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ReportFormat::Json => Box::new(JsonReport),
        ReportFormat::Markdown => Box::new(MarkdownReport),
        ReportFormat::Html => Box::new(HtmlReport),
    }
}

/// One renderer per supported format.
pub fn all_renderers() -> Vec<Box<dyn ReportRenderer>> {
    ReportFormat::ALL.into_iter().map(renderer_for).collect()
}

pub(crate) const TITLE: &str = "Maven Multi-Module Test Report";
