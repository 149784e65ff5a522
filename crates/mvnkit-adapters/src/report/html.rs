use std::fmt::Write;

use mvnkit_core::{
    application::ports::ReportRenderer,
    domain::{ReportFormat, RunResult, truncate},
    error::MvnkitResult,
};

use super::TITLE;

pub const HTML_CELL_BUDGET: usize = 100;

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background-color: #f5f5f5;
        }
        .header {
            background-color: #2c3e50;
            color: white;
            padding: 20px;
            border-radius: 5px;
        }
        .summary {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 20px;
            margin: 20px 0;
        }
        .summary-card {
            background: white;
            padding: 20px;
            border-radius: 5px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        .summary-card h3 {
            margin: 0 0 10px 0;
            color: #666;
        }
        .summary-card .value {
            font-size: 32px;
            font-weight: bold;
        }
        .passed { color: #27ae60; }
        .failed { color: #e74c3c; }
        table {
            width: 100%;
            background: white;
            border-collapse: collapse;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }
        th, td {
            padding: 12px;
            text-align: left;
            border-bottom: 1px solid #ddd;
        }
        th {
            background-color: #34495e;
            color: white;
        }
        tr:hover {
            background-color: #f5f5f5;
        }
"#;

/// Standalone page: header, four summary cards and the result table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlReport;

impl ReportRenderer for HtmlReport {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, result: &RunResult) -> MvnkitResult<String> {
        let summary = result.summary();
        let mut out = String::new();

        let _ = write!(
            out,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{TITLE}</title>
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="header">
        <h1>{TITLE}</h1>
        <p>Run at: {timestamp}</p>
    </div>

    <div class="summary">
        <div class="summary-card">
            <h3>Total</h3>
            <div class="value">{total}</div>
        </div>
        <div class="summary-card">
            <h3>Passed</h3>
            <div class="value passed">{passed}</div>
        </div>
        <div class="summary-card">
            <h3>Failed</h3>
            <div class="value failed">{failed}</div>
        </div>
        <div class="summary-card">
            <h3>Success rate</h3>
            <div class="value">{rate}</div>
        </div>
    </div>

    <table>
        <thead>
            <tr>
                <th>Check</th>
                <th>Status</th>
                <th>Output</th>
            </tr>
        </thead>
        <tbody>
"#,
            timestamp = escape(result.timestamp()),
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            rate = escape(&summary.success_rate),
        );

        for record in result.records() {
            let status = if record.passed() {
                r#"<span class="passed">✅ PASS</span>"#
            } else {
                r#"<span class="failed">❌ FAIL</span>"#
            };
            let _ = write!(
                out,
                "            <tr>\n                <td>{}</td>\n                <td>{}</td>\n                <td>{}</td>\n            </tr>\n",
                escape(record.name()),
                status,
                escape(&truncate(record.output(), HTML_CELL_BUDGET))
            );
        }

        out.push_str("        </tbody>\n    </table>\n</body>\n</html>\n");
        Ok(out)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::mixed_run;
    use mvnkit_core::domain::TestRecord;

    #[test]
    fn renders_summary_cards() {
        let text = HtmlReport.render(&mixed_run()).unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains(r#"<div class="value passed">2</div>"#));
        assert!(text.contains(r#"<div class="value failed">1</div>"#));
        assert!(text.contains("66.7%"));
        assert_eq!(text.matches("<tr>").count(), 4);
    }

    #[test]
    fn cells_are_truncated_then_escaped() {
        let output = format!("{}<tag>", "a".repeat(HTML_CELL_BUDGET - 2));
        let result = RunResult::new("t", vec![TestRecord::new("build", false, output)]);
        let text = HtmlReport.render(&result).unwrap();
        let expected = format!("<td>{}&lt;t...</td>", "a".repeat(HTML_CELL_BUDGET - 2));
        assert!(text.contains(&expected));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let result = RunResult::new(
            "t",
            vec![TestRecord::new("<script>\"x\" & y", true, "")],
        );
        let text = HtmlReport.render(&result).unwrap();
        assert!(text.contains("<td>&lt;script&gt;&quot;x&quot; &amp; y</td>"));
    }
}
