//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::chronicles_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    chronicles_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized chronicles journal"));

    let config_path = temp.path().join(".chronicles/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("timezone = \"local\""));
    assert!(content.contains("week_start = \"monday\""));
    assert!(content.contains("counting = \"per-day\""));
}

#[test]
fn test_init_with_timezone_and_week_start() {
    let temp = TempDir::new().unwrap();

    chronicles_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--timezone")
        .arg("+05:30")
        .arg("--week-start")
        .arg("sunday")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".chronicles/config.toml")).unwrap();
    assert!(content.contains("timezone = \"+05:30\""));
    assert!(content.contains("week_start = \"sunday\""));
}

#[test]
fn test_init_invalid_timezone_fails() {
    let temp = TempDir::new().unwrap();

    chronicles_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--timezone")
        .arg("mars")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));

    assert!(!temp.path().join(".chronicles").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    chronicles_cmd().arg("init").arg(temp.path()).assert().success();
    chronicles_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    chronicles_cmd().arg("init").arg(temp.path()).assert().success();

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("streak_anchor")
        .assert()
        .success()
        .stdout(predicate::str::contains("today"));

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("streak_anchor")
        .arg("yesterday")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set streak_anchor = yesterday"));

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("streak_anchor")
        .assert()
        .success()
        .stdout(predicate::str::contains("yesterday"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    chronicles_cmd().arg("init").arg(temp.path()).assert().success();

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("timezone = local"))
        .stdout(predicate::str::contains("week_start = monday"))
        .stdout(predicate::str::contains("streak_counting = per-day"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_invalid_key() {
    let temp = TempDir::new().unwrap();
    chronicles_cmd().arg("init").arg(temp.path()).assert().success();

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("mode")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_command_outside_journal() {
    let temp = TempDir::new().unwrap();

    chronicles_cmd()
        .current_dir(temp.path())
        .arg("streak")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("chronicles init"));
}

#[test]
fn test_root_from_environment() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    chronicles_cmd().arg("init").arg(temp.path()).assert().success();

    chronicles_cmd()
        .current_dir(elsewhere.path())
        .env("CHRONICLES_ROOT", temp.path())
        .arg("config")
        .arg("week_start")
        .assert()
        .success()
        .stdout(predicate::str::contains("monday"));
}
