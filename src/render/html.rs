// src/render/html.rs

//! Declarative HTML rendering of the schedule view model.
//!
//! `render_schedule` is pure: the same view model always produces the same
//! markup, with no UI runtime involved. The document wrapper adds the
//! `dark-mode` body class when the persisted preference asks for it.

use crate::models::{DaySchedule, ShiftRecord};

const HEADERS: [&str; 5] = ["Truck", "Start", "Driver", "Run", "Off"];

/// One section per non-empty shift; a shift with no records renders
/// nothing at all.
pub fn render_schedule(schedule: &DaySchedule) -> String {
    let mut out = String::new();

    if !schedule.day.is_empty() {
        out.push_str(&render_table("Day Shift", &schedule.day));
    }
    if !schedule.night.is_empty() {
        out.push_str(&render_table("Night Shift", &schedule.night));
    }

    out
}

fn render_table(title: &str, records: &[ShiftRecord]) -> String {
    let mut out = String::new();

    out.push_str("<section class=\"shift\">\n");
    out.push_str(&format!("  <h3>{}</h3>\n", escape(title)));
    out.push_str("  <table>\n    <thead>\n      <tr>");
    for h in HEADERS {
        out.push_str(&format!("<th>{h}</th>"));
    }
    out.push_str("</tr>\n    </thead>\n    <tbody>\n");

    for r in records {
        out.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&r.truck),
            escape(&r.start),
            escape(&r.driver),
            escape(&r.run),
            escape(&r.off),
        ));
    }

    out.push_str("    </tbody>\n  </table>\n</section>\n");
    out
}

/// Standalone page wrapping the per-date sections. Dates with no Day or
/// Night records are skipped entirely.
pub fn render_document(schedules: &[DaySchedule], dark: bool, generated: &str) -> String {
    let body_class = if dark { " class=\"dark-mode\"" } else { "" };
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>Shift Schedule</title>\n");
    out.push_str("<style>\n");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n");
    out.push_str(&format!("<body{body_class}>\n<h1>Shift Schedule</h1>\n"));

    for schedule in schedules {
        if schedule.is_empty() {
            continue;
        }
        out.push_str(&format!("<h2>{}</h2>\n", escape(&schedule.date)));
        out.push_str(&render_schedule(schedule));
    }

    if !generated.is_empty() {
        out.push_str(&format!("<footer>Generated {}</footer>\n", escape(generated)));
    }

    out.push_str("</body>\n</html>\n");
    out
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; background: #fff; color: #222; }
body.dark-mode { background: #1e1e1e; color: #ddd; }
table { border-collapse: collapse; margin-bottom: 1.5em; }
th, td { border: 1px solid #999; padding: 4px 10px; text-align: left; }
body.dark-mode th, body.dark-mode td { border-color: #555; }
th { background: #eee; }
body.dark-mode th { background: #333; }
footer { margin-top: 2em; font-size: 0.8em; color: #888; }
";
