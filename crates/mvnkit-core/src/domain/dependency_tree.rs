//! Structured reading of `mvn dependency:tree` output.
//!
//! ```text
//! [INFO] com.example:service-a:jar:1.0.0-SNAPSHOT          <- root, ignored
//! [INFO] +- com.example:common:jar:1.0.0-SNAPSHOT:compile
//! [INFO] |  \- org.springframework.boot:spring-boot-starter:jar:2.7.18:compile
//! [INFO] \- org.projectlombok:lombok:jar:1.18.30:provided
//! ```
//!
//! Only lines that start with a tree glyph after the `[INFO]` prefix are
//! entries. Plugin banners, warnings and the root artifact never match.

use std::fmt;

/// `group:artifact` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl Coordinate {
    /// Parses `group:artifact[:...]`. Both parts must be non-empty.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(':');
        let group_id = parts.next().filter(|p| !p.is_empty())?;
        let artifact_id = parts.next().filter(|p| !p.is_empty())?;
        Some(Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Dependencies found in one tree listing, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    entries: Vec<Coordinate>,
}

impl DependencyTree {
    pub fn parse(output: &str) -> Self {
        let entries = output.lines().filter_map(parse_entry).collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Coordinate] {
        &self.entries
    }

    pub fn contains(&self, expected: &Coordinate) -> bool {
        self.entries.iter().any(|c| c == expected)
    }
}

fn parse_entry(line: &str) -> Option<Coordinate> {
    let line = line.trim_end();
    let body = match line.strip_prefix("[INFO]") {
        Some(rest) => rest.trim_start(),
        None if line.starts_with('[') => return None,
        None => line.trim_start(),
    };

    if !(body.starts_with("+-") || body.starts_with("\\-") || body.starts_with('|')) {
        return None;
    }

    let coordinate = body
        .trim_start_matches(|c| matches!(c, '+' | '-' | '\\' | '|' | ' '))
        .split_whitespace()
        .next()?;

    // group:artifact:packaging:version[:scope]
    if coordinate.split(':').count() < 4 {
        return None;
    }
    Coordinate::parse(coordinate)
}
