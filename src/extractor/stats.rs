//! Extraction statistics
//!
//! Counters collected during a single pass, used for the end-of-run
//! summary and for verifying scanner behaviour in tests.

use serde::{Deserialize, Serialize};

/// Counters for one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Non-empty lines after normalization
    pub lines_read: usize,

    /// Rows written to the output table (header excluded)
    pub records_written: usize,

    /// Windows rejected because the statistics line had the wrong arity
    pub malformed_groups: usize,

    /// Lines stepped over because they were not a ranking start
    pub lines_skipped: usize,

    /// Lines left over when fewer than a full window remained
    pub trailing_lines: usize,
}

impl ExtractionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every ranking window produced a row
    pub fn is_clean(&self) -> bool {
        self.malformed_groups == 0
    }

    /// Share of lines consumed by written records, as a percentage
    pub fn coverage(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_written * crate::constants::RECORD_STRIDE) as f64 * 100.0
                / self.lines_read as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage() {
        let stats = ExtractionStats {
            lines_read: 8,
            records_written: 2,
            ..Default::default()
        };
        assert_eq!(stats.coverage(), 100.0);
        assert!(stats.is_clean());

        let stats = ExtractionStats {
            lines_read: 10,
            records_written: 1,
            malformed_groups: 1,
            ..Default::default()
        };
        assert_eq!(stats.coverage(), 40.0);
        assert!(!stats.is_clean());
    }

    #[test]
    fn test_coverage_empty_input() {
        assert_eq!(ExtractionStats::new().coverage(), 0.0);
    }
}
