mod common;
use common::{init_db_with_data, rva, setup_test_db, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rva()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_list_shows_usage() {
    let db_path = setup_test_db("list_usage");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ivan Petrov"))
        .stdout(contains("Anna Smirnova"))
        .stdout(contains("21"));

    rva()
        .args(["--db", &db_path, "list", "--details"])
        .assert()
        .success()
        .stdout(contains("2026-06-10 — 2026-06-30 (21 days)"))
        .stdout(contains("2026-06-29 — 2026-07-05 (7 days)"));
}

#[test]
fn test_vacation_with_reversed_dates_is_rejected() {
    let db_path = setup_test_db("vacation_reversed");
    init_db_with_data(&db_path);

    rva()
        .args([
            "--db",
            &db_path,
            "vacation",
            "add",
            "Ivan Petrov",
            "2026-07-05",
            "2026-07-01",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date range"));
}

#[test]
fn test_active_lists_absent_employees() {
    let db_path = setup_test_db("active_list");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "active", "--date", "2026-06-15"])
        .assert()
        .success()
        .stdout(contains("Ivan Petrov"))
        .stdout(contains("until 2026-06-30"))
        .stdout(contains("Anna Smirnova").not());

    rva()
        .args(["--db", &db_path, "active", "--date", "2026-06-30"])
        .assert()
        .success()
        .stdout(contains("(2)"));

    rva()
        .args(["--db", &db_path, "active", "--date", "2026-05-01"])
        .assert()
        .success()
        .stdout(contains("Nobody is on vacation on 2026-05-01"));
}

#[test]
fn test_calendar_month_renders_grid() {
    let db_path = setup_test_db("calendar_month");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "calendar", "--period", "2026-06"])
        .assert()
        .success()
        .stdout(contains("June 2026"))
        .stdout(contains("Mo"))
        .stdout(contains("IP"))
        .stdout(contains("AS"));

    rva()
        .args(["--db", &db_path, "calendar", "--period", "2026-06", "--names"])
        .assert()
        .success()
        .stdout(contains("Ivan Pe"));

    rva()
        .args(["--db", &db_path, "calendar", "--period", "June"])
        .assert()
        .failure();
}

#[test]
fn test_export_usage_and_calendar() {
    let db_path = setup_test_db("export_cli");
    init_db_with_data(&db_path);

    let usage = temp_out("export_cli_usage", "csv");
    rva()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &usage])
        .assert()
        .success();
    let text = fs::read_to_string(&usage).expect("usage csv");
    assert!(text.contains("Ivan Petrov,Engineer,28,21,7"));

    let calendar = temp_out("export_cli_calendar", "json");
    rva()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &calendar,
            "--calendar",
            "--period",
            "2026-07",
        ])
        .assert()
        .success();
    let text = fs::read_to_string(&calendar).expect("calendar json");
    assert!(text.contains("\"2026-07-05\""));

    // overwriting an existing file needs --force
    rva()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &usage, "--force",
        ])
        .assert()
        .success();
}

#[test]
fn test_show_and_delete() {
    let db_path = setup_test_db("show_delete");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "show", "Anna Smirnova"])
        .assert()
        .success()
        .stdout(contains("Remaining: 7 days"));

    rva()
        .args(["--db", &db_path, "vacation", "clear", "Anna Smirnova"])
        .assert()
        .success();

    rva()
        .args(["--db", &db_path, "show", "2"])
        .assert()
        .success()
        .stdout(contains("No vacations planned"));

    rva()
        .args(["--db", &db_path, "del", "Anna Smirnova", "-y"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rva()
        .args(["--db", &db_path, "show", "Anna Smirnova"])
        .assert()
        .failure()
        .stderr(contains("Employee not found"));
}

#[test]
fn test_import_json_file() {
    let db_path = setup_test_db("import_json");
    rva()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let input = temp_out("import_json_input", "json");
    fs::write(
        &input,
        r#"[
            {"name": "Vera Orlova", "total_days": 28,
             "vacations": [{"start": "2026-08-03", "end": "2026-08-16", "days": 14}]},
            {"name": "Broken", "vacations": [{"start": "2026-08-16", "end": "2026-08-03"}]},
            {"position": "Nobody"}
        ]"#,
    )
    .expect("write input");

    rva()
        .args(["--db", &db_path, "import", "--file", &input])
        .assert()
        .success()
        .stdout(contains("Imported 2 employee(s)"))
        .stdout(contains("Record discarded"))
        .stdout(contains("1 invalid vacation interval(s) dropped"));

    rva()
        .args(["--db", &db_path, "active", "--date", "2026-08-10"])
        .assert()
        .success()
        .stdout(contains("Vera Orlova"));
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("vacation"));
}

#[test]
fn test_add_with_invalid_color_keeps_database_usable() {
    let db_path = setup_test_db("invalid_color");
    init_db_with_data(&db_path);

    rva()
        .args(["--db", &db_path, "add", "Oleg", "--color", "#aéaaa"])
        .assert()
        .failure()
        .stderr(contains("Invalid color tag"));

    rva()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ivan Petrov"))
        .stdout(contains("Oleg").not());
}

#[test]
fn test_vacation_add_echoes_normalized_dates() {
    let db_path = setup_test_db("vacation_normalized");
    init_db_with_data(&db_path);

    rva()
        .args([
            "--db",
            &db_path,
            "vacation",
            "add",
            "Anna Smirnova",
            "2026-9-1",
            " 2026-09-03",
        ])
        .assert()
        .success()
        .stdout(contains("Vacation 2026-09-01 → 2026-09-03 (3 days) added for Anna Smirnova"));
}

#[test]
fn test_relative_db_path_resolves_to_the_same_file_for_every_command() {
    let root = std::env::temp_dir().join("rvacations_relative_db");
    let home = root.join("home");
    let cwd = root.join("cwd");
    fs::remove_dir_all(&root).ok();
    fs::create_dir_all(&home).expect("home");
    fs::create_dir_all(&cwd).expect("cwd");

    let run = |args: &[&str]| {
        let mut cmd = rva();
        cmd.env("HOME", &home).current_dir(&cwd).args(args);
        cmd
    };

    run(&["--db", "rel.sqlite", "--test", "init"]).assert().success();
    run(&["--db", "rel.sqlite", "add", "Ivan Petrov", "--days", "28"])
        .assert()
        .success();

    assert!(home.join(".rvacations").join("rel.sqlite").exists());
    assert!(!cwd.join("rel.sqlite").exists());

    run(&["--db", "rel.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("Ivan Petrov"));

    fs::remove_dir_all(&root).ok();
}
