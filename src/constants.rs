//! Application constants for the ranking extractor
//!
//! Output header, default file locations and the fixed record layout.

// =============================================================================
// Output Format
// =============================================================================

/// Header row written before any record
pub const OUTPUT_HEADER: [&str; 6] = ["Ranking", "Name", "Team", "PM", "Y.C.", "R.C."];

/// Field separator for the output table
pub const FIELD_DELIMITER: u8 = b',';

// =============================================================================
// Default Locations
// =============================================================================

/// Input file name, resolved next to the executable when no path is given
pub const DEFAULT_INPUT_FILE: &str = "entrada.txt";

/// Output file name, resolved next to the executable when no path is given
pub const DEFAULT_OUTPUT_FILE: &str = "salida.csv";

// =============================================================================
// Record Layout
// =============================================================================

/// Lines per record: ranking, name, team, statistics
pub const RECORD_STRIDE: usize = 4;

/// Offset of the statistics line from the ranking line
pub const STATISTICS_OFFSET: usize = RECORD_STRIDE - 1;

/// Tokens expected on a statistics line (PM, Y.C., R.C.)
pub const STATISTICS_ARITY: usize = 3;

/// Marker printed in front of console diagnostics
pub const DIAGNOSTIC_MARKER: &str = "❌";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
