//! Ranking Extractor Library
//!
//! Converts plain-text ranking reports into CSV tables.
//!
//! A report is a flat run of lines where each entry takes four lines:
//! a numeric ranking, a name, a team and a statistics line holding three
//! whitespace-separated values (PM, Y.C., R.C.). This library provides:
//! - Normalization of the raw text into trimmed, non-empty lines
//! - A cursor scanner that anchors records on ranking lines and
//!   re-synchronizes one line at a time after a malformed window
//! - A header-first CSV writer with standard field escaping
//! - Diagnostics for skipped windows without aborting the run

pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use error::{ExtractorError, Result};
pub use extractor::{
    CollectedDiagnostics, ConsoleDiagnostics, DiagnosticSink, ExtractionStats, RecordExtractor,
    RecordScanner, TableWriter, extract_file, extract_text,
};
pub use models::{MalformedGroup, Record, ScanEvent};
