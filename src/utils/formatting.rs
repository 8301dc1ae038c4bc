//! Formatting utilities used for CLI outputs.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Remove ANSI escape sequences, so widths are computed on visible text.
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Visible terminal width of a possibly-colored cell.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}
