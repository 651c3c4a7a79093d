//! Reporting of skipped windows
//!
//! A malformed statistics line never stops the run. The scanner hands each
//! one to a `DiagnosticSink`; the CLI prints them to stdout, tests collect
//! them.

use crate::error::Result;
use crate::models::MalformedGroup;
use colored::Colorize;
use std::io::{self, Stdout, Write};
use tracing::debug;

/// Destination for malformed-window diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, group: &MalformedGroup) -> Result<()>;
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, group: &MalformedGroup) -> Result<()> {
        (**self).report(group)
    }
}

/// Prints one line per diagnostic to a console-like writer
#[derive(Debug)]
pub struct ConsoleDiagnostics<W: Write> {
    out: W,
    colorize: bool,
}

impl ConsoleDiagnostics<Stdout> {
    /// Colored diagnostics on standard output
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            colorize: true,
        }
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    /// Plain diagnostics on any writer
    pub fn new(out: W) -> Self {
        Self {
            out,
            colorize: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&mut self, group: &MalformedGroup) -> Result<()> {
        debug!("Reporting malformed group at line {}: {}", group.line, group.reason());

        if self.colorize {
            writeln!(self.out, "{}", group.to_string().red())?;
        } else {
            writeln!(self.out, "{}", group)?;
        }
        Ok(())
    }
}

/// Keeps diagnostics in memory
#[derive(Debug, Default, Clone)]
pub struct CollectedDiagnostics {
    pub groups: Vec<MalformedGroup>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl DiagnosticSink for CollectedDiagnostics {
    fn report(&mut self, group: &MalformedGroup) -> Result<()> {
        self.groups.push(group.clone());
        Ok(())
    }
}
