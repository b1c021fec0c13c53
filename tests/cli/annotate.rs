//! Annotate subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_annotate_stdin() {
    cargo_bin_cmd!("listmark")
        .arg("annotate")
        .write_stdin("#. one\n#. two")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"widget\": \"hash-number\""))
        .stdout(predicate::str::contains("\"number\": 2"));
}

#[test]
fn test_annotate_output_is_json_array() {
    let output = cargo_bin_cmd!("listmark")
        .arg("annotate")
        .write_stdin("(@a) Example.\n\nSee (@a).")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    let reference = items
        .iter()
        .find(|i| i["payload"]["value"]["widget"] == "example-reference")
        .unwrap();
    assert_eq!(reference["from"], 19);
    assert_eq!(reference["to"], 23);
    assert_eq!(reference["payload"]["value"]["tooltip"], "Example.");
}

#[test]
fn test_annotate_cursor_keeps_marker() {
    cargo_bin_cmd!("listmark")
        .args(["annotate", "--cursor", "1"])
        .write_stdin("#. one")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"mark\""))
        .stdout(predicate::str::contains("hash-number").not());
}

#[test]
fn test_annotate_with_config_disabling_extension() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    let config_file = temp_dir.path().join(".listmark.toml");

    fs::write(&test_file, "x^2^ and H~2~O").unwrap();
    fs::write(&config_file, "[extensions]\nsuperscript = false\n").unwrap();

    cargo_bin_cmd!("listmark")
        .args(["annotate", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"widget\": \"subscript\""))
        .stdout(predicate::str::contains("\"widget\": \"superscript\"").not());
}

#[test]
fn test_annotate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("notes.md");
    let config_file = temp_dir.path().join("bad.toml");

    fs::write(&test_file, "#. one").unwrap();
    fs::write(&config_file, "tooltip_length = \"long\"").unwrap();

    cargo_bin_cmd!("listmark")
        .args([
            "annotate",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
