//! Integration tests for global options, bootstrap and error exit codes.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("flights.db"));

    assert!(env.database_path().exists());
    assert_eq!(env.row_count(), 0);
}

#[test]
fn test_init_is_idempotent() {
    let env = TestEnv::new();
    env.command().arg("init").assert().success();
    env.book_ada();

    env.command().arg("init").assert().success();
    assert_eq!(env.row_count(), 1);
}

#[test]
fn test_quiet_init_prints_nothing() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_data_dir_from_environment() {
    let env = TestEnv::new();

    env.command_bare()
        .env("FLIGHTDESK_DATA_DIR", &env.data_dir)
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_data_dir_flag_beats_environment() {
    let env = TestEnv::new();

    env.command()
        .env("FLIGHTDESK_DATA_DIR", "/nonexistent/elsewhere")
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_check_reports_ok() {
    let env = TestEnv::new();
    env.book_ada();

    env.command()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database OK"))
        .stdout(predicate::str::contains("1 reservation(s)"));
}

#[test]
fn test_invalid_config_exits_seven() {
    let env = TestEnv::new();
    env.write_config("maximum_lock_wait_seconds: 0\n");

    env.command()
        .arg("list")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key_exits_seven() {
    let env = TestEnv::new();
    env.write_config("colour: blue\n");

    env.command().arg("list").assert().code(7);
}

#[test]
fn test_unusable_data_dir_exits_one() {
    let env = TestEnv::new();
    std::fs::write(env.data_dir.parent().unwrap().join("blocker"), "x").unwrap();

    env.command_bare()
        .arg("--data-dir")
        .arg(env.data_dir.parent().unwrap().join("blocker"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to initialize"));
}

#[test]
fn test_out_of_range_busy_timeout_is_usage_error() {
    let env = TestEnv::new();

    for secs in ["0", "3601", "4000000"] {
        env.command()
            .args(["--busy-timeout", secs, "list"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("busy-timeout"));
    }

    env.command()
        .env("FLIGHTDESK_BUSY_TIMEOUT", "4000000")
        .arg("list")
        .assert()
        .code(2);

    env.command()
        .args(["--busy-timeout", "3600", "list"])
        .assert()
        .success();
}

#[test]
fn test_invalid_id_is_usage_error() {
    let env = TestEnv::new();

    env.command().args(["show", "abc"]).assert().code(2);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flightdesk"));
}

#[test]
fn test_version() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flightdesk"));
}
