//! The roster store: owns the full record sequence and answers every
//! view-model query. Loaded once per invocation, read-only afterwards.

use std::fs;
use std::path::Path;

use crate::core::parser;
use crate::models::record::{SHIFT_DAY, SHIFT_NIGHT};
use crate::models::{DaySchedule, ShiftRecord};
use crate::ui::messages;

pub struct Roster {
    records: Vec<ShiftRecord>,
}

impl Roster {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_csv(text: &str) -> Self {
        Self {
            records: parser::parse_roster(text),
        }
    }

    /// Load the roster file. A read failure is logged to the diagnostic
    /// channel and degrades to an empty roster: the date list stays empty
    /// and nothing renders.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_csv(&text),
            Err(e) => {
                messages::error(format!(
                    "Failed to load roster '{}': {}",
                    path.display(),
                    e
                ));
                Self::empty()
            }
        }
    }

    pub fn records(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct `date` values, lexicographically sorted (plain string
    /// sort, not calendar-aware), duplicate-free. Order of the input rows
    /// does not matter.
    pub fn distinct_dates(&self) -> Vec<String> {
        let mut dates: Vec<String> = self.records.iter().map(|r| r.date.clone()).collect();
        dates.sort();
        dates.dedup();
        dates
    }

    /// Default selection: the lexicographically smallest date.
    pub fn default_date(&self) -> Option<String> {
        self.distinct_dates().into_iter().next()
    }

    /// Build the view model for one date: the Day and Night subsequences
    /// whose `date` equals the key exactly, in original row order.
    /// Pure and idempotent; an unknown date yields an empty schedule.
    pub fn schedule_for(&self, date: &str) -> DaySchedule {
        let by_shift = |label: &str| -> Vec<ShiftRecord> {
            self.records
                .iter()
                .filter(|r| r.date == date && r.shift == label)
                .cloned()
                .collect()
        };

        DaySchedule {
            date: date.to_string(),
            day: by_shift(SHIFT_DAY),
            night: by_shift(SHIFT_NIGHT),
        }
    }

    /// Schedules for every distinct date, in date order.
    pub fn all_schedules(&self) -> Vec<DaySchedule> {
        self.distinct_dates()
            .iter()
            .map(|d| self.schedule_for(d))
            .collect()
    }
}
