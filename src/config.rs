//! Configuration management and validation.
//!
//! Input and output locations default to fixed file names beside the
//! running executable, so a bare invocation behaves like the original
//! drop-in script.

use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Locations for a single extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Plain-text ranking report to read
    pub input_path: PathBuf,

    /// CSV table to create (truncated on every run)
    pub output_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let base = default_base_dir();
        Self {
            input_path: base.join(DEFAULT_INPUT_FILE),
            output_path: base.join(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ExtractorConfig {
    /// Create configuration with explicit paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Override the input path
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Override the output path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Reject configurations that would clobber the input.
    ///
    /// Paths are compared as written, without resolving them, so `./a.txt`
    /// and `a.txt` count as different files.
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ExtractorError::configuration("Input path is empty"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ExtractorError::configuration("Output path is empty"));
        }
        if self.input_path == self.output_path {
            return Err(ExtractorError::configuration(format!(
                "Input and output refer to the same file: {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}

/// Directory holding the running executable, or the working directory
/// when it cannot be determined
pub fn default_base_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(e) => {
            debug!("Could not locate executable ({}), using working directory", e);
            PathBuf::from(".")
        }
    }
}
