use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SAMPLE_CSV, document_xml, rts_isolated, temp_out, write_docx, write_temp};

#[test]
fn test_report_totals_after_reallocation() {
    let input = write_temp("cli_report", "csv", SAMPLE_CSV);

    rts_isolated("cli_report")
        .args(["report", &input])
        .assert()
        .success()
        .stdout(contains("Basic:   40h 0m"))
        .stdout(contains("OT 1.5:  4h 30m"))
        .stdout(contains("OT 2.0:  0h 30m"))
        .stdout(contains("TOTAL:   45h 0m"))
        .stdout(contains("Week 11"))
        .stdout(contains("No issues detected."));
}

#[test]
fn test_report_single_section() {
    let input = write_temp("cli_report_weekly", "csv", SAMPLE_CSV);

    rts_isolated("cli_report_weekly")
        .args(["report", &input, "--weekly"])
        .assert()
        .success()
        .stdout(contains("Total:  45h 0m"))
        .stdout(contains("TOTAL:").not());
}

#[test]
fn test_report_empty_timesheet() {
    let input = write_temp(
        "cli_report_empty",
        "csv",
        "Date,Day,Week,Start,Finish,Lunch,BasicHours,OT1_5Hours,OT2_0Hours,Notes\n",
    );

    rts_isolated("cli_report_empty")
        .args(["report", &input])
        .assert()
        .success()
        .stdout(contains("No rows in timesheet."))
        .stdout(contains("No issues detected (no data)."));
}

#[test]
fn test_check_lists_issues_and_strict_fails() {
    let csv = "Date,Week,Start,Finish,Lunch,BasicHours\n\
               2025-03-10,W,9:00,8:00,0,\n\
               2025-03-11,W,,,,eight\n";
    let input = write_temp("cli_check", "csv", csv);

    rts_isolated("cli_check")
        .args(["check", &input])
        .assert()
        .success()
        .stdout(contains("Row 1 (2025-03-10): Finish time is before start time after lunch."))
        .stdout(contains("Row 2 (2025-03-11): Basic hours \"eight\" is invalid."))
        .stdout(contains("2 issue(s) found"));

    rts_isolated("cli_check")
        .args(["check", &input, "--strict"])
        .assert()
        .failure()
        .stderr(contains("2 issue(s)"));
}

#[test]
fn test_check_clean_file_strict_passes() {
    let input = write_temp("cli_check_clean", "csv", SAMPLE_CSV);

    rts_isolated("cli_check_clean")
        .args(["check", &input, "--strict"])
        .assert()
        .success()
        .stdout(contains("5 row(s) checked, no issues."));
}

#[test]
fn test_list_shows_parsed_values() {
    let input = write_temp("cli_list", "csv", SAMPLE_CSV);

    rts_isolated("cli_list")
        .args(["list", &input])
        .assert()
        .success()
        .stdout(contains("Worked"))
        .stdout(contains("10h 0m"))
        .stdout(contains("Friday"))
        .stdout(contains("5 row(s)"));
}

#[test]
fn test_export_docx_to_csv() {
    let xml = document_xml(
        &["Week Number: 12"],
        &[
            vec!["Date", "Worksite", "Start", "Finish", "Lunch", "Basic", "O/T 1.5", "O/T 2.0"],
            vec!["17/03/2025", "Depot, east", "7:00", "15:30", "30", "8", "", ""],
        ],
    );
    let input = write_docx("cli_export_docx", &xml);
    let out = temp_out("cli_export_docx", "csv");

    rts_isolated("cli_export_docx")
        .args(["export", &input, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Date,Day,Week,Start,Finish,Lunch,BasicHours,OT1_5Hours,OT2_0Hours,Notes"));
    assert!(content.contains("17/03/2025,Monday,Week 12,7:00,15:30,30,8,,,\"Depot, east\""));
}

#[test]
fn test_export_json_and_refuse_overwrite() {
    let input = write_temp("cli_export_json", "csv", SAMPLE_CSV);
    let out = temp_out("cli_export_json", "json");

    rts_isolated("cli_export_json")
        .args(["export", &input, "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"week\": \"Week 11\""));

    // existing file, no --force, answer "n"
    rts_isolated("cli_export_json")
        .args(["export", &input, "--format", "json", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    rts_isolated("cli_export_json")
        .args(["export", &input, "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
    let content = fs::read_to_string(&out).expect("read overwritten file");
    assert!(content.starts_with("Date,Day,Week"));
}

#[test]
fn test_import_without_table_is_reported() {
    let input = write_temp("cli_no_table", "html", "<p>Just a letter</p>");

    rts_isolated("cli_no_table")
        .args(["report", &input])
        .assert()
        .failure()
        .stderr(contains("Could not find a timesheet table"));
}

#[test]
fn test_unsupported_input() {
    let input = write_temp("cli_unsupported", "txt", "hello");

    rts_isolated("cli_unsupported")
        .args(["check", &input])
        .assert()
        .failure()
        .stderr(contains("Unsupported input file"));
}

#[test]
fn test_payload_to_stdout_and_missing_name() {
    let input = write_temp("cli_payload", "csv", SAMPLE_CSV);

    rts_isolated("cli_payload")
        .args([
            "payload", &input, "--name", "Jo Bloggs", "--from", "2025-03-10", "--to", "2025-03-16",
        ])
        .assert()
        .success()
        .stdout(contains("\"employee_name\": \"Jo Bloggs\""))
        .stdout(contains("OT1_5Hours"));

    rts_isolated("cli_payload")
        .args(["payload", &input, "--from", "2025-03-10", "--to", "2025-03-16"])
        .assert()
        .failure()
        .stderr(contains("Missing required input: employee name"));
}

#[test]
fn test_init_and_config_check() {
    let cfg = temp_out("cli_init", "conf");

    common::rts()
        .args(["--config", &cfg, "init"])
        .assert()
        .success();
    assert!(fs::read_to_string(&cfg).unwrap().contains("weekly_basic_threshold_minutes: 2400"));

    common::rts()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    fs::write(&cfg, "mismatch_tolerance_minutes: 5\n").unwrap();
    common::rts()
        .args(["--config", &cfg, "config", "--check", "--print"])
        .assert()
        .success()
        .stdout(contains("weekly_basic_threshold_minutes"))
        .stdout(contains("mismatch_tolerance_minutes: 5"));
}

#[test]
fn test_config_threshold_changes_report() {
    let cfg = temp_out("cli_threshold", "conf");
    fs::write(&cfg, "weekly_basic_threshold_minutes: 2220\n").unwrap();
    let input = write_temp("cli_threshold", "csv", SAMPLE_CSV);

    // 37h basic already reaches the threshold: overtime kept as entered
    common::rts()
        .args(["--config", &cfg, "report", &input, "--overall"])
        .assert()
        .success()
        .stdout(contains("Basic:   37h 0m"))
        .stdout(contains("OT 1.5:  7h 30m"));
}
