use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{TWO_SESSION_LOG, WAYPOINTS_CSV, log_csv, temp_file, temp_out, tlg};

/// Config path that never exists, so the user's own config is not read.
fn no_config(name: &str) -> String {
    temp_out(&format!("{name}_noconf"), "conf")
}

#[test]
fn test_convert_csv_to_stdout() {
    let log = temp_file("cli_csv_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_csv_wp", "csv", WAYPOINTS_CSV);

    tlg()
        .args(["--config", &no_config("cli_csv"), "convert", "-d", &log, "-w", &wp, "-f", "csv"])
        .assert()
        .success()
        .stdout(contains("start_date_time,end_date_time"))
        .stdout(contains("2024-05-01 10:00:00,2024-05-01 10:10:00,100.2,A,37.2/-122.3"))
        .stdout(contains("2024-05-01 11:20:00,2024-05-01 11:20:00,100.4,B,B"));
}

#[test]
fn test_convert_json_to_file() {
    let log = temp_file("cli_json_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_json_wp", "csv", WAYPOINTS_CSV);
    let out = temp_out("cli_json", "json");

    tlg()
        .args([
            "--config",
            &no_config("cli_json"),
            "convert",
            "--user-data-log",
            &log,
            "--user-waypoints",
            &wp,
            "--format",
            "json",
            "--output",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(2));
    assert_eq!(value[1]["end_of_trip_hobbs_time"], "100.4");
}

#[test]
fn test_existing_output_needs_confirmation() {
    let log = temp_file("cli_force_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_force_wp", "csv", WAYPOINTS_CSV);
    let out = temp_file("cli_force_out", "csv", "old content\n");
    let conf = no_config("cli_force");

    tlg()
        .args(["--config", &conf, "convert", "-d", &log, "-w", &wp, "-o", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old content\n");

    tlg()
        .args(["--config", &conf, "convert", "-d", &log, "-w", &wp, "-o", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("100.4"));
}

#[test]
fn test_missing_log_file_fails() {
    let wp = temp_file("cli_missing_wp", "csv", WAYPOINTS_CSV);
    let log = temp_out("cli_missing_log", "csv");

    tlg()
        .args(["--config", &no_config("cli_missing"), "convert", "-d", &log, "-w", &wp])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does not exist"));
}

#[test]
fn test_empty_log_is_not_an_error() {
    let log = temp_file("cli_empty_log", "csv", &log_csv(&[]));
    let wp = temp_file("cli_empty_wp", "csv", WAYPOINTS_CSV);

    tlg()
        .args(["--config", &no_config("cli_empty"), "convert", "-d", &log, "-w", &wp])
        .assert()
        .success()
        .stdout(predicates::str::is_empty())
        .stderr(contains("Is the input file empty?"));
}

#[test]
fn test_malformed_numeric_is_fatal() {
    let log = temp_file(
        "cli_malformed_log",
        "csv",
        &log_csv(&["1,one,6,37.0,-122.0,100,1.0,2024-05-01 10:00:00"]),
    );
    let wp = temp_file("cli_malformed_wp", "csv", WAYPOINTS_CSV);

    tlg()
        .args(["--config", &no_config("cli_malformed"), "convert", "-d", &log, "-w", &wp])
        .assert()
        .failure()
        .stderr(contains("GPS Fix Quality"));
}

#[test]
fn test_cli_thresholds_override_defaults() {
    let log = temp_file("cli_thresholds_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_thresholds_wp", "csv", WAYPOINTS_CSV);

    // con 7 satelliti minimi resta solo l'ultima riga
    tlg()
        .args([
            "--config",
            &no_config("cli_thresholds"),
            "convert",
            "-d",
            &log,
            "-w",
            &wp,
            "--min-satellites",
            "7",
        ])
        .assert()
        .success()
        .stdout(contains("100.4,B,B"))
        .stdout(contains("100.2").not());
}

#[test]
fn test_waypoints_from_config_file() {
    let log = temp_file("cli_cfgwp_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_cfgwp_wp", "csv", WAYPOINTS_CSV);
    let conf = temp_file(
        "cli_cfgwp",
        "conf",
        &format!("waypoints_file: '{wp}'\noutput_format: table\n"),
    );

    tlg()
        .args(["--config", &conf, "convert", "-d", &log])
        .assert()
        .success()
        .stdout(contains("end_of_trip_hobbs_time"))
        .stdout(contains("100.4"));
}

#[test]
fn test_table_redirected_to_file_has_no_ansi_codes() {
    let log = temp_file("cli_plain_table_log", "csv", TWO_SESSION_LOG);
    let wp = temp_file("cli_plain_table_wp", "csv", WAYPOINTS_CSV);

    // stdout di assert_cmd è una pipe, non un terminale
    tlg()
        .args([
            "--config",
            &no_config("cli_plain_table"),
            "convert",
            "-d",
            &log,
            "-w",
            &wp,
            "-f",
            "table",
        ])
        .assert()
        .success()
        .stdout(contains("37.2/-122.3"))
        .stdout(contains("\x1b[").not());
}

#[test]
fn test_convert_without_waypoints_fails() {
    let log = temp_file("cli_nowp_log", "csv", TWO_SESSION_LOG);

    tlg()
        .args(["--config", &no_config("cli_nowp"), "convert", "-d", &log])
        .assert()
        .failure()
        .stderr(contains("waypoint"));
}

#[test]
fn test_inspect_shows_sessions() {
    let log = temp_file("cli_inspect_log", "csv", TWO_SESSION_LOG);

    tlg()
        .args(["--config", &no_config("cli_inspect"), "inspect", "-d", &log])
        .assert()
        .success()
        .stdout(contains("2 session(s), 2 trip(s)"))
        .stdout(contains("low fix quality: 1"));
}

#[test]
fn test_init_and_print_config() {
    let conf = temp_out("cli_init", "conf");

    tlg().args(["--config", &conf, "init"]).assert().success();
    assert!(fs::metadata(&conf).is_ok());

    tlg()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("min_fix_quality: 1"))
        .stdout(contains("min_satellites: 4"))
        .stdout(contains("segment_field: session_time"));
}

#[test]
fn test_invalid_config_is_reported() {
    let conf = temp_file("cli_badconf", "conf", "waypoint_tolerance_m: -5\n");

    tlg()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("waypoint_tolerance_m"));
}
