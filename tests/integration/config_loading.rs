//! Integration tests for building a Config from each kind of source

use super::test_utils::{
    expected_ini_params, expected_json_params, write_fixture, INI_DOCUMENT, JSON_DOCUMENT,
};
use paramset::{Config, ParamError};
use serde_json::json;
use std::fs::File;
use std::io::Cursor;
use tempfile::TempDir;

fn assert_matches_json_fixture(config: &Config) {
    let expected = expected_json_params();
    for key in ["test_int", "test_string", "test_list", "test_dict"] {
        assert_eq!(config[key], expected[key], "mismatch at {key}");
    }
}

#[test]
fn test_config_from_dict() {
    let config: Config = Config::from_dict(expected_json_params(), false).unwrap();
    assert_matches_json_fixture(&config);
    assert!(!config.values_as_strings());
}

#[test]
fn test_config_from_json_string() {
    let config: Config = Config::from_string(JSON_DOCUMENT, false).unwrap();
    assert_matches_json_fixture(&config);
    assert!(!config.values_as_strings());
}

#[test]
fn test_config_from_ini_string() {
    let config: Config = Config::from_string(INI_DOCUMENT, false).unwrap();
    assert_eq!(config["test_header"]["test_string"], json!("test123"));
    assert_eq!(config.params(), &expected_ini_params());
    assert!(config.values_as_strings());
}

#[test]
fn test_config_from_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(temp_dir.path(), "params.json", JSON_DOCUMENT);

    let config: Config = Config::from_file(&path, false).unwrap();
    assert_matches_json_fixture(&config);
    assert!(!config.values_as_strings());
}

#[test]
fn test_config_from_ini_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(temp_dir.path(), "params.ini", INI_DOCUMENT);

    let config: Config = Config::from_file(&path, false).unwrap();
    assert_eq!(config["test_header"]["test_string"], json!("test123"));
    assert!(config.values_as_strings());
}

#[test]
fn test_detection_ignores_file_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(temp_dir.path(), "params.ini", JSON_DOCUMENT);

    let config: Config = Config::from_file(&path, false).unwrap();
    assert!(!config.values_as_strings());
}

#[test]
fn test_config_from_json_stream() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(temp_dir.path(), "params.json", JSON_DOCUMENT);
    let file = File::open(&path).unwrap();

    let config: Config = Config::from_stream(file, false).unwrap();
    assert_matches_json_fixture(&config);
    assert!(!config.values_as_strings());
}

#[test]
fn test_config_from_ini_stream() {
    let config: Config = Config::from_stream(Cursor::new(INI_DOCUMENT), false).unwrap();
    assert_eq!(config["test_header"]["test_string"], json!("test123"));
    assert!(config.values_as_strings());
}

#[test]
fn test_change_config_value() {
    let mut config: Config = Config::new(expected_json_params(), false);
    config.set_param("test_int", 5);

    assert_eq!(config["test_int"], json!(5));
    assert_eq!(config["test_string"], json!("test"));
    assert_eq!(config["test_list"], json!(["test1", "test2"]));
    assert_eq!(config["test_dict"], json!({"test": "test"}));
}

#[test]
fn test_get_keys_in_insertion_order() {
    let config: Config = Config::new(expected_json_params(), false);
    assert_eq!(
        config.keys(),
        vec!["test_dict", "test_int", "test_list", "test_string"]
    );

    let config: Config = Config::from_string(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, false).unwrap();
    assert_eq!(config.keys(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_get_reports_missing_key() {
    let config: Config = Config::new(expected_json_params(), false);
    assert!(config.get("test_int").is_ok());
    assert!(matches!(config.get("nope"), Err(ParamError::MissingKey(_))));
}

#[test]
fn test_unparseable_text_fails_with_ini_error() {
    let err = Config::<paramset::NoDefaults>::from_string("{ not json, not ini", false).unwrap_err();
    assert!(matches!(err, ParamError::Ini { .. }), "got {err:?}");
}

#[test]
fn test_missing_file_fails_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::<paramset::NoDefaults>::from_file(temp_dir.path().join("absent.json"), false)
        .unwrap_err();
    assert!(matches!(err, ParamError::Io(_)));
}
