mod common;
use common::{SAMPLE_CSV, setup_home, sr, write_roster};
use predicates::prelude::*;

#[test]
fn dates_lists_distinct_sorted_dates() {
    let home = setup_home("dates_lists");
    let roster = write_roster(&home, SAMPLE_CSV);

    sr(&home)
        .args(["--roster", &roster, "dates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01\n2024-01-02"));
}

#[test]
fn dates_on_missing_roster_logs_and_stays_empty() {
    let home = setup_home("dates_missing");

    sr(&home)
        .args(["--roster", "/nonexistent/shifts.csv", "dates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No dates in roster."))
        .stderr(predicate::str::contains("Failed to load roster"));
}

#[test]
fn show_defaults_to_the_first_date() {
    let home = setup_home("show_default");
    let roster = write_roster(&home, SAMPLE_CSV);

    sr(&home)
        .args(["--roster", &roster, "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 2024-01-01 ==="))
        .stdout(predicate::str::contains("Day Shift"))
        .stdout(predicate::str::contains("Night Shift"))
        .stdout(predicate::str::contains("Route A - North"))
        .stdout(predicate::str::contains("John"))
        .stdout(predicate::str::contains("Jane"));
}

#[test]
fn show_explicit_date_renders_only_that_date() {
    let home = setup_home("show_explicit");
    let roster = write_roster(&home, SAMPLE_CSV);

    sr(&home)
        .args(["--roster", &roster, "show", "2024-01-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 2024-01-02 ==="))
        .stdout(predicate::str::contains("Route C"))
        .stdout(predicate::str::contains("Night Shift").not());
}

#[test]
fn show_unknown_date_prints_a_notice() {
    let home = setup_home("show_unknown");
    let roster = write_roster(&home, SAMPLE_CSV);

    sr(&home)
        .args(["--roster", &roster, "show", "1999-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shifts for 1999-12-31."));
}

#[test]
fn show_on_missing_roster_degrades_quietly() {
    let home = setup_home("show_missing");

    sr(&home)
        .args(["--roster", "/nonexistent/shifts.csv", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No dates in roster."));
}

#[test]
fn first_names_only_in_rendered_tables() {
    let home = setup_home("show_first_names");
    let roster = write_roster(&home, SAMPLE_CSV);

    sr(&home)
        .args(["--roster", &roster, "show", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith").not())
        .stdout(predicate::str::contains("Doe").not());
}

#[test]
fn init_creates_config_and_starter_roster() {
    let home = setup_home("init_creates");

    sr(&home).arg("init").assert().success();

    let dir = std::path::PathBuf::from(&home).join(".shiftroster");
    assert!(dir.join("shiftroster.conf").exists());
    assert!(dir.join("shifts.csv").exists());

    let roster = std::fs::read_to_string(dir.join("shifts.csv")).unwrap();
    assert!(roster.starts_with("Truck,Start,Driver,Run,Off,Shift,Date"));
}

#[test]
fn config_print_shows_roster_path() {
    let home = setup_home("config_print");

    sr(&home).arg("init").assert().success();

    sr(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("roster:"))
        .stdout(predicate::str::contains("separator_char:"));
}
