//! Core data structures for ranking extraction.
//!
//! Records borrow from the normalized input lines; nothing outlives a
//! single extraction run.

use crate::constants::{DIAGNOSTIC_MARKER, STATISTICS_ARITY};
use serde::Serialize;
use std::fmt;

/// One ranked entry, taken from a 4-line window of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record<'a> {
    pub ranking: &'a str,
    pub name: &'a str,
    pub team: &'a str,
    pub pm: &'a str,
    pub yc: &'a str,
    pub rc: &'a str,
}

impl<'a> Record<'a> {
    /// Build a record from the window lines and the split statistics.
    ///
    /// Returns `None` unless exactly three statistics tokens are given.
    pub fn from_window(
        ranking: &'a str,
        name: &'a str,
        team: &'a str,
        statistics: &[&'a str],
    ) -> Option<Self> {
        match *statistics {
            [pm, yc, rc] => Some(Self {
                ranking,
                name,
                team,
                pm,
                yc,
                rc,
            }),
            _ => None,
        }
    }

    /// Fields in output column order
    pub fn to_row(&self) -> [&'a str; 6] {
        [
            self.ranking,
            self.name,
            self.team,
            self.pm,
            self.yc,
            self.rc,
        ]
    }
}

/// A candidate window whose statistics line did not split into three tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedGroup {
    /// Index of the statistics line within the normalized lines
    pub line: usize,
    /// Statistics line as it appeared after trimming
    pub raw: String,
    /// Number of tokens the line actually split into
    pub token_count: usize,
}

impl fmt::Display for MalformedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Invalid statistics at line {}: '{}'",
            DIAGNOSTIC_MARKER, self.line, self.raw
        )
    }
}

impl MalformedGroup {
    /// Short reason used in log output
    pub fn reason(&self) -> String {
        format!(
            "expected {} statistics, found {}",
            STATISTICS_ARITY, self.token_count
        )
    }
}

/// Outcome of examining one ranking start line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    Record(Record<'a>),
    Malformed(MalformedGroup),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_window_requires_three_statistics() {
        let record = Record::from_window("1", "Alice", "Red", &["10", "5", "3"]).unwrap();
        assert_eq!(record.to_row(), ["1", "Alice", "Red", "10", "5", "3"]);

        assert!(Record::from_window("1", "Alice", "Red", &["10", "5"]).is_none());
        assert!(Record::from_window("1", "Alice", "Red", &["10", "5", "3", "1"]).is_none());
        assert!(Record::from_window("1", "Alice", "Red", &[]).is_none());
    }

    #[test]
    fn test_malformed_group_display() {
        let group = MalformedGroup {
            line: 3,
            raw: "10 20".to_string(),
            token_count: 2,
        };

        assert_eq!(group.to_string(), "❌ Invalid statistics at line 3: '10 20'");
        assert_eq!(group.reason(), "expected 3 statistics, found 2");
    }
}
