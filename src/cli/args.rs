//! Command-line argument definitions for the ranking extractor
//!
//! Every argument is optional. With none given the tool reads `entrada.txt`
//! and writes `salida.csv` beside the executable.

use crate::config::ExtractorConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use clap::Parser;
use std::path::PathBuf;

/// Convert a plain-text ranking report into a CSV table
///
/// Each entry in the report spans four lines: ranking, name, team and a
/// statistics line with three values (PM, Y.C., R.C.). Entries whose
/// statistics line is malformed are reported on stdout and skipped.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ranking-extractor",
    version,
    about = "Convert a plain-text ranking report into a CSV table"
)]
pub struct Args {
    /// Input path to the plain-text ranking report
    ///
    /// Defaults to entrada.txt in the executable's directory.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        help = "Input ranking report"
    )]
    pub input_path: Option<PathBuf>,

    /// Output path for the generated CSV table
    ///
    /// Truncated and rewritten on every run. Defaults to salida.csv in the
    /// executable's directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output CSV table"
    )]
    pub output_path: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Malformed-entry diagnostics are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress logging and the summary except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Build the extraction config, filling unset paths with defaults
    pub fn to_config(&self) -> ExtractorConfig {
        let mut config = ExtractorConfig::default();
        if let Some(path) = &self.input_path {
            config = config.with_input_path(path);
        }
        if let Some(path) = &self.output_path {
            config = config.with_output_path(path);
        }
        config
    }

    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether to print the end-of-run summary
    pub fn show_summary(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};

    #[test]
    fn test_no_arguments_uses_default_files() {
        let args = Args::try_parse_from(["ranking-extractor"]).unwrap();
        let config = args.to_config();

        assert_eq!(config.input_path.file_name().unwrap(), DEFAULT_INPUT_FILE);
        assert_eq!(config.output_path.file_name().unwrap(), DEFAULT_OUTPUT_FILE);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.show_summary());
    }

    #[test]
    fn test_explicit_paths() {
        let args =
            Args::try_parse_from(["ranking-extractor", "-i", "report.txt", "--output", "out.csv"])
                .unwrap();
        let config = args.to_config();

        assert_eq!(config.input_path, PathBuf::from("report.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_only_output_overridden() {
        let args = Args::try_parse_from(["ranking-extractor", "-o", "out.csv"]).unwrap();
        let config = args.to_config();

        assert_eq!(config.input_path.file_name().unwrap(), DEFAULT_INPUT_FILE);
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from(["ranking-extractor", "-v"]).unwrap();
        assert_eq!(args.get_log_level(), "info");

        let args = Args::try_parse_from(["ranking-extractor", "-vv"]).unwrap();
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["ranking-extractor", "-vvvv"]).unwrap();
        assert_eq!(args.get_log_level(), "trace");

        let args = Args::try_parse_from(["ranking-extractor", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_summary());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from(["ranking-extractor", "-q", "-v"]);
        assert!(result.is_err());
    }
}
