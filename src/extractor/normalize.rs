//! Input normalization and line classification.

/// Split text into trimmed lines, dropping the ones that end up empty.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Relative order of the
/// surviving lines is preserved.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    // The empty piece between '\r' and '\n' is dropped by the filter
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// True when the line is a non-empty run of ASCII decimal digits.
///
/// Other Unicode digit characters (superscripts such as `²`, Arabic-Indic
/// digits) are not ranking starts, even though `char::is_numeric` would
/// accept them.
pub fn is_ranking_start(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Split a statistics line on any run of spaces or tabs
pub fn split_statistics(line: &str) -> Vec<&str> {
    // split_whitespace treats tabs as separators and drops empty tokens
    line.split_whitespace().collect()
}
