//! Integration tests for the paramset binary

use super::test_utils::{write_fixture, INI_DOCUMENT, JSON_DOCUMENT};
use std::process::{Command, Output};
use tempfile::TempDir;

fn paramset(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_paramset"))
        .env_remove("PARAMSET_LOG")
        .env_remove("PARAMSET_LOG_FORMAT")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_keys_lists_top_level_keys() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "params.json", JSON_DOCUMENT);

    let output = paramset(&["keys", input.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "test_dict\ntest_int\ntest_list\ntest_string\n"
    );
}

#[test]
fn test_get_prints_value_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "params.ini", INI_DOCUMENT);

    let output = paramset(&["get", input.to_str().unwrap(), "test_header"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\n  \"test_string\": \"test123\"\n}\n"
    );
}

#[test]
fn test_get_missing_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "params.json", JSON_DOCUMENT);

    let output = paramset(&["get", input.to_str().unwrap(), "absent"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Missing key: absent"));
}

#[test]
fn test_show_merges_over_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let defaults = write_fixture(temp_dir.path(), "defaults.json", r#"{"a": 1, "b": 2}"#);
    let input = write_fixture(temp_dir.path(), "params.json", r#"{"a": 500}"#);

    let output = paramset(&[
        "show",
        input.to_str().unwrap(),
        "--defaults",
        defaults.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Config object:\n{\n  \"a\": 500,\n  \"b\": 2\n}\n"
    );
}

#[test]
fn test_convert_ini_to_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "params.ini", INI_DOCUMENT);
    let output_dir = temp_dir.path().join("converted");

    let output = paramset(&[
        "convert",
        input.to_str().unwrap(),
        "--name",
        "params",
        "--output-dir",
        output_dir.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let written = output_dir.join("params.json");
    assert_eq!(stdout(&output).trim_end(), written.display().to_string());
    assert_eq!(
        std::fs::read_to_string(written).unwrap(),
        "{\n    \"test_header\": {\n        \"test_string\": \"test123\"\n    }\n}"
    );
}

#[test]
fn test_convert_to_ini_rejects_flat_values() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "params.json", JSON_DOCUMENT);

    let output = paramset(&[
        "convert",
        input.to_str().unwrap(),
        "--name",
        "params",
        "--output-dir",
        temp_dir.path().to_str().unwrap(),
        "--ini",
    ]);
    assert!(!output.status.success());
    assert!(!temp_dir.path().join("params.ini").exists());
}

#[test]
fn test_unreadable_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(temp_dir.path(), "garbage.txt", "{ neither json nor ini");

    let output = paramset(&["show", input.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("INI parse error"));
}
