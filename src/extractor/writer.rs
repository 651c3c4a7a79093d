//! CSV output for extracted records
//!
//! The header row goes out as soon as the writer is created, so even a run
//! that finds no records leaves a valid table behind.

use crate::constants::{FIELD_DELIMITER, OUTPUT_HEADER};
use crate::error::{ExtractorError, Result};
use crate::models::Record;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Header-first CSV writer for ranking rows
pub struct TableWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl TableWriter<File> {
    /// Create (or truncate) the output file and write the header
    pub fn create(path: &Path) -> Result<Self> {
        let inner = builder()
            .from_path(path)
            .map_err(|source| ExtractorError::OutputCreate {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Opened output table {}", path.display());
        Self::with_header(inner)
    }
}

impl<W: Write> TableWriter<W> {
    /// Wrap any writer and write the header
    pub fn new(writer: W) -> Result<Self> {
        Self::with_header(builder().from_writer(writer))
    }

    fn with_header(mut inner: csv::Writer<W>) -> Result<Self> {
        inner.write_record(OUTPUT_HEADER)?;
        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    /// Append one record as a row
    pub fn write_record(&mut self, record: &Record<'_>) -> Result<()> {
        self.inner.write_record(record.to_row())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Rows written so far, header excluded
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| ExtractorError::Io(e.into_error()))
    }
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .delimiter(FIELD_DELIMITER)
        .quote_style(QuoteStyle::Necessary)
        .terminator(platform_terminator());
    builder
}

/// Record terminator matching the host platform's line endings
fn platform_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}
