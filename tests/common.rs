#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Roster used by most CLI tests: two dates, a quoted run with an
/// internal comma, multi-word names.
pub const SAMPLE_CSV: &str = "\
Truck,Start,Driver,Run,Off,Shift,Date
T1,08:00,John Smith,\"Route A, North\",Jane Doe,Day,2024-01-01
T2,09:00,Bob Lee,Route B,Amy Wu,Night,2024-01-01
T3,07:30,Carla Jones,Route C,Dan Roe,Day,2024-01-02
";

/// Build a shiftroster command with HOME pointing at a per-test scratch
/// dir, so config and preferences never touch the real ones.
pub fn sr(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("shiftroster");
    cmd.env("HOME", home);
    cmd.env_remove("COLORFGBG");
    cmd
}

/// Create a scratch HOME for one test and wipe any previous state.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftroster_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch home");
    path.to_string_lossy().to_string()
}

/// Write a roster file inside the scratch home and return its path.
pub fn write_roster(home: &str, content: &str) -> String {
    let path = PathBuf::from(home).join("shifts.csv");
    fs::write(&path, content).expect("write roster");
    path.to_string_lossy().to_string()
}

/// Absolute output path for export tests, removed up front.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
