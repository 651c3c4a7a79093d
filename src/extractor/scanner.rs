//! Cursor scan over normalized lines
//!
//! The scanner walks the lines with a single cursor. A ranking start line
//! opens a 4-line window; a good window moves the cursor past all four
//! lines, a window with a bad statistics line moves it by one so the
//! following lines get another chance to start a record.

use super::normalize::{is_ranking_start, split_statistics};
use crate::constants::{RECORD_STRIDE, STATISTICS_OFFSET};
use crate::models::{MalformedGroup, Record, ScanEvent};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Iterator of scan events over a slice of normalized lines
#[derive(Debug, Clone)]
pub struct RecordScanner<'a> {
    lines: &'a [&'a str],
    cursor: usize,
    lines_skipped: usize,
}

impl<'a> RecordScanner<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            cursor: 0,
            lines_skipped: 0,
        }
    }

    /// Current cursor position
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Non-ranking lines stepped over so far
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }

    /// Lines not consumed by the scan. Once the iterator is exhausted this
    /// is the incomplete trailing group, always fewer than four lines.
    pub fn trailing_lines(&self) -> usize {
        self.lines.len().saturating_sub(self.cursor)
    }

    fn has_window(&self) -> bool {
        self.cursor + STATISTICS_OFFSET < self.lines.len()
    }
}

impl<'a> Iterator for RecordScanner<'a> {
    type Item = ScanEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.has_window() {
            let start = self.cursor;
            let ranking = self.lines[start];

            if !is_ranking_start(ranking) {
                trace!("Line {} is not a ranking start: '{}'", start, ranking);
                self.cursor += 1;
                self.lines_skipped += 1;
                continue;
            }

            let statistics_line = self.lines[start + STATISTICS_OFFSET];
            let tokens = split_statistics(statistics_line);

            let event = match Record::from_window(
                ranking,
                self.lines[start + 1],
                self.lines[start + 2],
                &tokens,
            ) {
                Some(record) => {
                    debug!("Record at line {}: ranking {}", start, record.ranking);
                    self.cursor += RECORD_STRIDE;
                    ScanEvent::Record(record)
                }
                None => {
                    let group = MalformedGroup {
                        line: start + STATISTICS_OFFSET,
                        raw: statistics_line.to_string(),
                        token_count: tokens.len(),
                    };
                    debug!("Skipping window at line {}: {}", start, group.reason());
                    self.cursor += 1;
                    ScanEvent::Malformed(group)
                }
            };

            return Some(event);
        }

        None
    }
}

impl FusedIterator for RecordScanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records<'a>(events: &[ScanEvent<'a>]) -> Vec<[&'a str; 6]> {
        events
            .iter()
            .filter_map(|event| match event {
                ScanEvent::Record(record) => Some(record.to_row()),
                ScanEvent::Malformed(_) => None,
            })
            .collect()
    }

    fn malformed(events: &[ScanEvent<'_>]) -> Vec<MalformedGroup> {
        events
            .iter()
            .filter_map(|event| match event {
                ScanEvent::Malformed(group) => Some(group.clone()),
                ScanEvent::Record(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_well_formed_groups_in_order() {
        let lines = [
            "1", "Alice", "RedTeam", "10 5 3", "2", "Bob", "BlueTeam", "8 2 1", "3", "Carol",
            "GreenTeam", "0 0 0",
        ];
        let events: Vec<_> = RecordScanner::new(&lines).collect();

        assert_eq!(events.len(), lines.len() / RECORD_STRIDE);
        assert_eq!(
            records(&events),
            vec![
                ["1", "Alice", "RedTeam", "10", "5", "3"],
                ["2", "Bob", "BlueTeam", "8", "2", "1"],
                ["3", "Carol", "GreenTeam", "0", "0", "0"],
            ]
        );
    }

    #[test]
    fn test_malformed_statistics_advances_by_one() {
        let lines = ["1", "Alice", "Red", "10 20", "Bob", "Red", "30 40 50"];
        let mut scanner = RecordScanner::new(&lines);

        let first = scanner.next().unwrap();
        assert_eq!(
            first,
            ScanEvent::Malformed(MalformedGroup {
                line: 3,
                raw: "10 20".to_string(),
                token_count: 2,
            })
        );
        assert_eq!(scanner.position(), 1);

        // No later line anchors a full window
        assert!(scanner.next().is_none());
        assert_eq!(scanner.lines_skipped(), 3);
        assert_eq!(scanner.trailing_lines(), 3);
    }

    #[test]
    fn test_malformed_group_recovers_at_next_ranking() {
        let lines = ["1", "Alice", "Red", "10 20", "2", "Bob", "Red", "30 40 50"];
        let events: Vec<_> = RecordScanner::new(&lines).collect();

        assert_eq!(malformed(&events).len(), 1);
        assert_eq!(records(&events), vec![["2", "Bob", "Red", "30", "40", "50"]]);
    }

    #[test]
    fn test_digit_statistics_line_can_start_a_record() {
        // The rejected window's statistics line is itself a ranking start,
        // which is only reachable because the cursor moves by one.
        let lines = ["1", "Alice", "Red", "42", "Bob", "Blue", "1 2 3"];
        let events: Vec<_> = RecordScanner::new(&lines).collect();

        assert_eq!(malformed(&events).len(), 1);
        assert_eq!(records(&events), vec![["42", "Bob", "Blue", "1", "2", "3"]]);
    }

    #[test]
    fn test_too_many_statistics_is_malformed() {
        let lines = ["7", "Dave", "Gold", "1 2 3 4"];
        let events: Vec<_> = RecordScanner::new(&lines).collect();

        assert_eq!(
            malformed(&events),
            vec![MalformedGroup {
                line: 3,
                raw: "1 2 3 4".to_string(),
                token_count: 4,
            }]
        );
        assert!(records(&events).is_empty());
    }

    #[test]
    fn test_trailing_partial_group_is_silent() {
        let lines = ["1", "Alice", "Red", "10 5 3", "2", "Bob", "Blue"];
        let mut scanner = RecordScanner::new(&lines);
        let events: Vec<_> = scanner.by_ref().collect();

        assert_eq!(events.len(), 1);
        assert!(malformed(&events).is_empty());
        assert_eq!(scanner.trailing_lines(), 3);
    }

    #[test]
    fn test_leading_noise_is_skipped_line_by_line() {
        let lines = ["Season ranking", "Top players", "1", "Alice", "Red", "10\t5 3"];
        let mut scanner = RecordScanner::new(&lines);
        let events: Vec<_> = scanner.by_ref().collect();

        assert_eq!(records(&events), vec![["1", "Alice", "Red", "10", "5", "3"]]);
        assert_eq!(scanner.lines_skipped(), 2);
        assert_eq!(scanner.trailing_lines(), 0);
    }

    #[test]
    fn test_fewer_than_four_lines() {
        let lines = ["1", "Alice", "Red"];
        let mut scanner = RecordScanner::new(&lines);
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
        assert_eq!(scanner.trailing_lines(), 3);

        let empty: [&str; 0] = [];
        assert!(RecordScanner::new(&empty).next().is_none());
    }
}
