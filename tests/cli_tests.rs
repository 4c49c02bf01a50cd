//! Integration tests for the CLI interface
//!
//! Tests argument parsing plus one full offline run: pointed at an
//! unreachable loopback endpoint, every state's failures are absorbed to a
//! zero count and the summary artifact is still written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_help_lists_all_flags() {
    let mut cmd = Command::cargo_bin("hopcount").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--states"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let mut cmd = Command::cargo_bin("hopcount").unwrap();
    cmd.arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let mut cmd = Command::cargo_bin("hopcount").unwrap();
    cmd.arg("--timeout")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_unreachable_directory_still_writes_summary() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("async.json");

    // Port 9 (discard) is closed on any normal machine, so every request
    // fails at the transport level and each state absorbs to a zero count
    let mut cmd = Command::cargo_bin("hopcount").unwrap();
    cmd.arg("--base-url")
        .arg("http://127.0.0.1:9/breweries")
        .arg("--states")
        .arg("maryland,virginia")
        .arg("--timeout")
        .arg("2")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("maryland -> 0"))
        .stdout(predicate::str::contains("virginia -> 0"))
        .stdout(predicate::str::contains("serial version"));

    let contents = std::fs::read_to_string(&output).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(summary["result"]
        .as_str()
        .unwrap()
        .contains("than the serial version"));
    assert!(!summary["host"].as_str().unwrap().is_empty());
}
