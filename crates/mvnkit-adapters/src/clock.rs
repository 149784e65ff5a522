//! Clock adapters.

use chrono::{Local, NaiveDateTime};
use mvnkit_core::application::ports::Clock;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    fn file_stamp(&self) -> String {
        Local::now().format(FILE_STAMP_FORMAT).to_string()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Parses `YYYY-mm-ddTHH:MM:SS`.
    pub fn parse(at: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S").map(Self::new)
    }
}

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.at.format(TIMESTAMP_FORMAT).to_string()
    }

    fn file_stamp(&self) -> String {
        self.at.format(FILE_STAMP_FORMAT).to_string()
    }
}
