use serde::Serialize;

/// One normalized row of the roster CSV.
///
/// All fields are derived from the raw line at parse time and never
/// mutated afterwards:
/// - `driver` and `off` keep only the first whitespace-delimited token
///   of the original name field;
/// - `run` has the surrounding quotes stripped and internal commas
///   rewritten to " - ";
/// - `date` is an opaque grouping key, not a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftRecord {
    pub truck: String,
    pub start: String,
    pub driver: String,
    pub run: String,
    pub off: String,
    pub shift: String,
    pub date: String,
}

/// Shift labels recognized by the view model. Compared case-sensitively.
pub const SHIFT_DAY: &str = "Day";
pub const SHIFT_NIGHT: &str = "Night";
