//! Command implementations for the ranking extractor CLI
//!
//! Logging setup, the extraction run itself and the end-of-run summary.

use crate::cli::args::Args;
use crate::extractor::{ConsoleDiagnostics, ExtractionStats, RecordExtractor};
use anyhow::{Context, Result};
use colored::Colorize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging
/// 2. Resolve the input/output configuration
/// 3. Run the extraction with console diagnostics
/// 4. Print the summary
pub fn run(args: Args) -> Result<ExtractionStats> {
    setup_logging(&args)?;

    info!("Starting ranking extractor");
    debug!("Command line arguments: {:?}", args);

    execute(&args)
}

/// Run the extraction described by `args` without touching global logging
pub fn execute(args: &Args) -> Result<ExtractionStats> {
    let start_time = Instant::now();

    let config = args.to_config();
    debug!("Resolved configuration: {:?}", config);

    let extractor = RecordExtractor::new(config);
    let stats = extractor.run(ConsoleDiagnostics::stdout()).with_context(|| {
        format!(
            "Extraction from {} failed",
            extractor.config().input_path.display()
        )
    })?;

    if args.show_summary() {
        print_summary(&stats, start_time.elapsed());
    }

    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ranking_extractor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Human-readable summary on stderr, keeping stdout for diagnostics
fn print_summary(stats: &ExtractionStats, elapsed: Duration) {
    eprintln!(
        "{} {} records written in {:.2?}",
        "Done:".bright_green().bold(),
        stats.records_written,
        elapsed
    );

    if stats.malformed_groups > 0 {
        eprintln!(
            "   {} malformed entries skipped",
            stats.malformed_groups.to_string().bright_yellow()
        );
    }

    debug!(
        "Lines read: {}, skipped: {}, trailing: {}, coverage: {:.1}%",
        stats.lines_read,
        stats.lines_skipped,
        stats.trailing_lines,
        stats.coverage()
    );
}
