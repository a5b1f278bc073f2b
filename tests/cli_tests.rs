//! Integration tests for the CLI interface
//!
//! Each test points --data-dir at its own temp directory so state never
//! leaks between tests or into the real platform data dir.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn krugi(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("krugi").unwrap();
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("krugi").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_status_on_first_run() {
    let dir = TempDir::new().unwrap();
    krugi(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 из 5556"));
}

#[test]
fn test_default_command_is_status() {
    let dir = TempDir::new().unwrap();
    krugi(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("из 5556"));
}

#[test]
fn test_add_reports_new_count() {
    let dir = TempDir::new().unwrap();
    krugi(&dir)
        .args(["add", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 из 5556"));
}

#[test]
fn test_add_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "108"]).assert().success();
    krugi(&dir).args(["add", "108"]).assert().success();

    krugi(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("216 из 5556"));
}

#[test]
fn test_add_non_positive_is_silent_noop() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "10"]).assert().success();

    krugi(&dir)
        .args(["add", "-5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    krugi(&dir)
        .args(["add", "0"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    krugi(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("10 из 5556"));
}

#[test]
fn test_set_clamps_above_target() {
    let dir = TempDir::new().unwrap();
    krugi(&dir)
        .args(["set", "999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5556 из 5556"));
}

#[test]
fn test_set_clamps_below_zero() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "40"]).assert().success();
    krugi(&dir)
        .args(["set", "-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 из 5556"));
}

#[test]
fn test_copy_prints_summary() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "25"]).assert().success();
    krugi(&dir)
        .args(["set", "1200"])
        .assert()
        .success();

    // Clipboard may be unavailable in CI; the summary itself must print
    krugi(&dir)
        .arg("copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("25 кругов (1200)"));
}

#[test]
fn test_reset_force() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "300"]).assert().success();

    krugi(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 из 5556"));
}

#[test]
fn test_reset_declined_keeps_count() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "300"]).assert().success();

    krugi(&dir)
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset cancelled"));

    krugi(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("300 из 5556"));
}

#[test]
fn test_reset_confirmed_zeroes_count() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["add", "300"]).assert().success();

    krugi(&dir)
        .arg("reset")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 из 5556"));
}

#[test]
fn test_completion_marker_at_target() {
    let dir = TempDir::new().unwrap();
    krugi(&dir).args(["set", "5556"]).assert().success();

    krugi(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Цель достигнута"));
}
