use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = "tests/data/UnicodeData.sample.txt";

fn casemap_gen() -> Command {
    let mut cmd = Command::cargo_bin("casemap-gen").unwrap();
    cmd.env_remove("CASEMAP_INPUT")
        .env_remove("CASEMAP_OUTPUT")
        .env_remove("CASEMAP_FORMAT")
        .env_remove("CASEMAP_LOG");
    cmd
}

#[test]
fn cli_generates_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("case_mappings.cpp");
    casemap_gen()
        .env("CASEMAP_INPUT", Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE))
        .env("CASEMAP_OUTPUT", &output)
        .assert()
        .success()
        .stderr(predicate::str::contains("[casemap-gen][INFO] wrote"));
    assert!(output.exists());
}

#[test]
fn cli_reports_malformed_line_with_nonzero_exit() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("UnicodeData.txt");
    std::fs::write(&input, "0041;A;Lu;0;L\n").unwrap();
    let output = dir.path().join("case_mappings.cpp");

    casemap_gen()
        .env("CASEMAP_INPUT", &input)
        .env("CASEMAP_OUTPUT", &output)
        .env("CASEMAP_LOG", "off")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("UnicodeData.txt:1: malformed record"));
    assert!(!output.exists());
}

#[test]
fn cli_rejects_unknown_format() {
    casemap_gen()
        .env("CASEMAP_FORMAT", "cobol")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn cli_log_off_stays_silent_on_success() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("case_mappings.cpp");
    casemap_gen()
        .env("CASEMAP_INPUT", Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE))
        .env("CASEMAP_OUTPUT", &output)
        .env("CASEMAP_LOG", "off")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(output.exists());
}
