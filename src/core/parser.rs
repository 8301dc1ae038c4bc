//! Roster CSV parsing.
//!
//! This is deliberately NOT an RFC 4180 parser: a comma is a field
//! delimiter only when an even number of quote characters has been seen
//! since the start of the line. That handles a single quoted field
//! containing commas (the run description) and nothing more — no escaped
//! quotes, no multi-line fields. Downstream data relies on this exact
//! field layout, so the rule must not be "fixed".

use crate::models::ShiftRecord;

/// Parse the full CSV text (header row + data rows) into the ordered
/// record sequence.
///
/// The first line is always treated as a header and discarded, without
/// any name-based column matching. Empty input yields no records.
pub fn parse_roster(text: &str) -> Vec<ShiftRecord> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.lines().skip(1).map(record_from_line).collect()
}

/// Map one data line to a normalized record.
///
/// Rows shorter than 7 fields are not rejected: missing columns become
/// empty strings. Columns beyond index 6 are ignored.
pub fn record_from_line(line: &str) -> ShiftRecord {
    let fields = split_line(line);

    ShiftRecord {
        truck: field(&fields, 0).to_string(),
        start: field(&fields, 1).to_string(),
        driver: first_token(field(&fields, 2)),
        run: normalize_run(field(&fields, 3)),
        off: first_token(field(&fields, 4)),
        shift: field(&fields, 5).to_string(),
        date: field(&fields, 6).to_string(),
    }
}

/// Split a line on commas outside even-quote-balanced regions.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quotes = 0usize;

    for ch in line.chars() {
        match ch {
            '"' => {
                quotes += 1;
                current.push(ch);
            }
            ',' if quotes % 2 == 0 => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Trimmed field at `idx`, or "" when the row is too short.
fn field<'a>(fields: &'a [String], idx: usize) -> &'a str {
    fields.get(idx).map(|f| f.trim()).unwrap_or("")
}

/// First whitespace-delimited token of a name field ("John Smith" -> "John").
fn first_token(s: &str) -> String {
    s.split_whitespace().next().unwrap_or("").to_string()
}

/// Normalize the run description: strip one leading and one trailing
/// quote, then rewrite internal commas (with any surrounding whitespace)
/// to " - ", so `"Route A, North"` becomes `Route A - North`.
fn normalize_run(raw: &str) -> String {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    let s = s.strip_suffix('"').unwrap_or(s);

    if !s.contains(',') {
        return s.to_string();
    }

    s.split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" - ")
}
