//! Test records and the run result they fold into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Characters of captured output kept per record.
pub const RECORD_OUTPUT_BUDGET: usize = 1000;

/// Appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `budget` characters, appending [`ELLIPSIS`] when
/// anything was dropped.
///
/// Counts `char`s, so a multi-byte code point is never split. Text that
/// already fits is returned unchanged.
pub fn truncate(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + ELLIPSIS.len());
            out.push_str(&text[..cut]);
            out.push_str(ELLIPSIS);
            out
        }
    }
}

// ── TestRecord ────────────────────────────────────────────────────────────────

/// One named pass/fail outcome with its captured diagnostic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    name: String,
    passed: bool,
    output: String,
}

impl TestRecord {
    /// Output longer than [`RECORD_OUTPUT_BUDGET`] characters is truncated.
    pub fn new(name: impl Into<String>, passed: bool, output: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            passed,
            output: truncate(output.as_ref(), RECORD_OUTPUT_BUDGET),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn output(&self) -> &str {
        &self.output
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub success_rate: String,
}

impl Summary {
    /// Pure fold over the records.
    ///
    /// The rate is `passed / total` with one decimal, or `0%` for an empty
    /// run. Two failed records give `0.0%`.
    pub fn of(records: &[TestRecord]) -> Self {
        let total = records.len();
        let passed = records.iter().filter(|r| r.passed).count();
        let success_rate = if total == 0 {
            "0%".to_string()
        } else {
            format!("{:.1}%", passed as f64 / total as f64 * 100.0)
        };
        Self {
            total,
            passed,
            failed: total - passed,
            success_rate,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

// ── RunResult ─────────────────────────────────────────────────────────────────

/// Ordered records of one orchestrator run plus their summary.
///
/// The summary is computed here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    timestamp: String,
    summary: Summary,
    records: Vec<TestRecord>,
}

impl RunResult {
    pub fn new(timestamp: impl Into<String>, records: Vec<TestRecord>) -> Self {
        Self {
            timestamp: timestamp.into(),
            summary: Summary::of(&records),
            records,
        }
    }

    /// A run that stopped early because a step it depends on failed, such
    /// as the full build. Its rate is reported as a flat `0%`.
    pub fn aborted(timestamp: impl Into<String>, records: Vec<TestRecord>) -> Self {
        let mut summary = Summary::of(&records);
        summary.success_rate = "0%".to_string();
        Self {
            timestamp: timestamp.into(),
            summary,
            records,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn failed_records(&self) -> impl Iterator<Item = &TestRecord> {
        self.records.iter().filter(|r| !r.passed)
    }
}

// ── ReportFormat ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Json,
    #[default]
    Markdown,
    Html,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [Self::Json, Self::Markdown, Self::Html];

    /// File extension of the written report.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" | "htm" => Ok(Self::Html),
            other => Err(DomainError::UnknownReportFormat {
                name: other.to_string(),
            }),
        }
    }
}
