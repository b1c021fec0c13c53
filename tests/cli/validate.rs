//! Validate subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_validate_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("clean.md");
    fs::write(&test_file, "Intro.\n\n#. one\n#. two\n").unwrap();

    cargo_bin_cmd!("listmark")
        .args(["validate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_validate_reports_issues() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("bad.md");
    fs::write(&test_file, "Intro.\n#. one\n\nA. capital\n").unwrap();

    cargo_bin_cmd!("listmark")
        .args(["validate", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("bad.md:2:"))
        .stdout(predicate::str::contains("[blank-before-list]"))
        .stdout(predicate::str::contains("bad.md:4:"))
        .stdout(predicate::str::contains("[capital-letter-spacing]"))
        .stderr(predicate::str::contains("Found 2 issue(s)"));
}

#[test]
fn test_validate_stdin_ignores_code() {
    cargo_bin_cmd!("listmark")
        .arg("validate")
        .write_stdin("Intro.\n```\n#. not a list\n```\n")
        .assert()
        .success();
}

#[test]
fn test_validate_skips_disabled_extensions() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("listmark.toml"),
        "[extensions]\nhash_lists = false\n",
    )
    .unwrap();
    let test_file = temp_dir.path().join("bad.md");
    fs::write(&test_file, "Intro.\n#. one\n\nA. capital\n").unwrap();

    cargo_bin_cmd!("listmark")
        .args(["validate", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("bad.md:2:").not())
        .stdout(predicate::str::contains("bad.md:4:"))
        .stderr(predicate::str::contains("Found 1 issue(s)"));
}
