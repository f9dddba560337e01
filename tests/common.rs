#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rvacations::core::interval::validate_interval;
use rvacations::models::Employee;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rva() -> Command {
    let mut cmd = cargo_bin_cmd!("rvacations");
    cmd.env("NO_COLOR", "1");
    // keep the user's config file out of the way
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvacations.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvacations_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and add two employees with one vacation each
pub fn init_db_with_data(db_path: &str) {
    rva()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rva()
        .args([
            "--db", db_path, "add", "Ivan Petrov", "--position", "Engineer", "--days", "28",
        ])
        .assert()
        .success();

    rva()
        .args([
            "--db",
            db_path,
            "add",
            "Anna Smirnova",
            "--position",
            "Accountant",
            "--days",
            "14",
        ])
        .assert()
        .success();

    rva()
        .args([
            "--db",
            db_path,
            "vacation",
            "add",
            "Ivan Petrov",
            "2026-06-10",
            "2026-06-30",
        ])
        .assert()
        .success();

    rva()
        .args([
            "--db",
            db_path,
            "vacation",
            "add",
            "Anna Smirnova",
            "2026-06-29",
            "2026-07-05",
        ])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// In-memory employee with the given `(start, end)` intervals.
pub fn employee(id: i64, name: &str, spans: &[(&str, &str)]) -> Employee {
    let vacations = spans
        .iter()
        .map(|(s, e)| validate_interval(s, e).expect("valid test interval"))
        .collect();
    let mut emp = Employee::new(name, "Staff", 28, "#4363d8").with_vacations(vacations);
    emp.id = id;
    emp
}
