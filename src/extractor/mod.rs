//! Ranking report extraction
//!
//! Reads a plain-text ranking report, groups its lines into 4-line
//! records (ranking, name, team, statistics) and writes them as CSV.
//!
//! ```no_run
//! use ranking_extractor::extract_file;
//! use std::path::Path;
//!
//! let stats = extract_file(Path::new("entrada.txt"), Path::new("salida.csv"))?;
//! println!("{} records written", stats.records_written);
//! # Ok::<(), ranking_extractor::ExtractorError>(())
//! ```

pub mod diagnostics;
pub mod normalize;
pub mod scanner;
pub mod stats;
pub mod writer;

pub use diagnostics::{CollectedDiagnostics, ConsoleDiagnostics, DiagnosticSink};
pub use normalize::{is_ranking_start, normalize_lines, split_statistics};
pub use scanner::RecordScanner;
pub use stats::ExtractionStats;
pub use writer::TableWriter;

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, Result};
use crate::models::ScanEvent;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// File-to-file extraction driven by an `ExtractorConfig`
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    config: ExtractorConfig,
}

impl RecordExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Read the input file, rewrite the output table and report skipped
    /// windows to `diagnostics`.
    ///
    /// The input is fully read and decoded before the output is touched, so
    /// a missing or undecodable input leaves any previous output in place.
    pub fn run<D: DiagnosticSink>(&self, diagnostics: D) -> Result<ExtractionStats> {
        self.config.validate()?;

        info!(
            "Extracting {} -> {}",
            self.config.input_path.display(),
            self.config.output_path.display()
        );

        let text = read_input(&self.config.input_path)?;
        let mut table = TableWriter::create(&self.config.output_path)?;
        let stats = extract_text(&text, &mut table, diagnostics)?;
        table.finish()?;

        info!(
            "Wrote {} records ({} malformed groups skipped)",
            stats.records_written, stats.malformed_groups
        );
        Ok(stats)
    }
}

/// Extract `input` into `output`, printing diagnostics to stdout
pub fn extract_file(input: &Path, output: &Path) -> Result<ExtractionStats> {
    RecordExtractor::new(ExtractorConfig::new(input, output)).run(ConsoleDiagnostics::stdout())
}

/// Run the scan over in-memory text, appending rows to an open table
pub fn extract_text<W: Write, D: DiagnosticSink>(
    text: &str,
    table: &mut TableWriter<W>,
    mut diagnostics: D,
) -> Result<ExtractionStats> {
    let lines = normalize_lines(text);
    debug!("Normalized input to {} lines", lines.len());

    let mut stats = ExtractionStats {
        lines_read: lines.len(),
        ..Default::default()
    };

    let mut scanner = RecordScanner::new(&lines);
    for event in scanner.by_ref() {
        match event {
            ScanEvent::Record(record) => {
                table.write_record(&record)?;
                stats.records_written += 1;
            }
            ScanEvent::Malformed(group) => {
                diagnostics.report(&group)?;
                stats.malformed_groups += 1;
            }
        }
    }

    stats.lines_skipped = scanner.lines_skipped();
    stats.trailing_lines = scanner.trailing_lines();

    if stats.trailing_lines > 0 {
        debug!("Discarded {} trailing lines", stats.trailing_lines);
    }

    Ok(stats)
}

/// Read the whole input file as UTF-8
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ExtractorError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|source| ExtractorError::InvalidEncoding {
        path: path.to_path_buf(),
        source,
    })
}
