use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Roster;
use crate::errors::AppResult;
use crate::models::{DaySchedule, ShiftRecord};
use crate::theme;
use crate::ui::messages::info;
use crate::utils::colors::colorize_cell;
use crate::utils::path;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let roster = Roster::load(&path::roster_path(&cfg.roster));

        // selected date, or the first one in sort order
        let selected = match date.clone().or_else(|| roster.default_date()) {
            Some(d) => d,
            None => {
                info("No dates in roster.");
                return Ok(());
            }
        };

        let schedule = roster.schedule_for(&selected);

        if schedule.is_empty() {
            println!("No shifts for {}.", selected);
            return Ok(());
        }

        let dark = theme::controller_from_config()?.is_dark();
        print_schedule(&schedule, cfg, dark);
    }
    Ok(())
}

fn print_schedule(schedule: &DaySchedule, cfg: &Config, dark: bool) {
    println!("\n=== {} ===", schedule.date);

    // the dark palette swaps the muted blue for cyan so the night table
    // stays readable on dark backgrounds
    let day_colour = Colour::Yellow;
    let night_colour = if dark { Colour::Cyan } else { Colour::Blue };

    if !schedule.day.is_empty() {
        print_shift_table("Day Shift", day_colour, &schedule.day, cfg);
    }
    if !schedule.night.is_empty() {
        print_shift_table("Night Shift", night_colour, &schedule.night, cfg);
    }
}

fn print_shift_table(title: &str, colour: Colour, records: &[ShiftRecord], cfg: &Config) {
    let mut table = Table::new(vec![
        Column::new("Truck"),
        Column::new("Start"),
        Column::new("Driver"),
        Column::new("Run"),
        Column::new("Off"),
    ]);

    for r in records {
        table.add_row(vec![
            colorize_cell(&r.truck),
            colorize_cell(&r.start),
            colorize_cell(&r.driver),
            wrap_run(&r.run, cfg.max_run_width),
            colorize_cell(&r.off),
        ]);
    }

    println!("\n{}", colour.bold().paint(title));
    print!("{}", table.render(&cfg.separator_char));
}

/// Long run descriptions wrap instead of blowing up the table width.
fn wrap_run(run: &str, max_width: usize) -> String {
    if run.trim().is_empty() {
        return colorize_cell(run);
    }
    textwrap::fill(run, max_width.max(1))
}
