// src/render/logic.rs

use crate::core::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::{DaySchedule, ShiftRecord};
use crate::render::ExportFormat;
use crate::render::fs_utils::ensure_writable;
use crate::render::html::render_document;
use crate::render::json_csv::{export_csv, export_json};
use crate::render::notify_export_success;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster view.
    ///
    /// - `file`: absolute path of the output file
    /// - `date`: `None` exports every date, `Some(d)` only that date
    /// - `dark`: HTML output carries the dark-mode class
    /// - `generated`: timestamp line for the HTML footer ("" to omit)
    pub fn export(
        roster: &Roster,
        format: ExportFormat,
        file: &str,
        date: &Option<String>,
        force: bool,
        dark: bool,
        generated: &str,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let schedules: Vec<DaySchedule> = match date {
            None => roster.all_schedules(),
            Some(d) => vec![roster.schedule_for(d)],
        };

        let records: Vec<ShiftRecord> = schedules
            .iter()
            .flat_map(|s| s.all_records().cloned())
            .collect();

        if records.is_empty() {
            warning("No shifts found for the selected date. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
            ExportFormat::Html => {
                let doc = render_document(&schedules, dark, generated);
                fs::write(path, doc)?;
                notify_export_success("HTML", path);
            }
        }

        Ok(())
    }
}
