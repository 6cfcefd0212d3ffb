//! Tests for config module

use boletines_cli::config::ResolvedConfigFile;
use boletines_cli::constants::DEFAULT_DATA_URL;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("boletines.toml");

    let config_content = r#"
start = "2024-01"
end = "2024-06"
data_source = "data/boletines.json"
derived_dir = "out/derived"
pretty_json = true
max_retries = 5
request_timeout_secs = 10
"#;

    fs::write(&config_path, config_content).unwrap();

    let config = ResolvedConfigFile::from_toml_file(&config_path).unwrap();

    assert_eq!(config.start.as_deref(), Some("2024-01"));
    assert_eq!(config.end.as_deref(), Some("2024-06"));
    assert_eq!(config.resolved.data_source, "data/boletines.json");
    assert_eq!(config.resolved.derived_dir, PathBuf::from("out/derived"));
    assert!(config.resolved.pretty_json);
    assert_eq!(config.resolved.max_retries, 5);
    assert_eq!(config.resolved.request_timeout_secs, 10);
}

#[test]
fn test_config_defaults_fill_missing_keys() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("boletines.toml");

    fs::write(&config_path, "start = \"2024\"\n").unwrap();

    let config = ResolvedConfigFile::from_toml_file(&config_path).unwrap();

    assert_eq!(config.start.as_deref(), Some("2024"));
    assert!(config.end.is_none());
    assert_eq!(config.resolved.data_source, DEFAULT_DATA_URL);
    assert_eq!(config.resolved.raw_dir, PathBuf::from("data/raw"));
    assert_eq!(config.resolved.derived_dir, PathBuf::from("data/derived"));
    assert!(!config.resolved.keep_raw_snapshot);
    assert_eq!(config.resolved.max_retries, 3);
    assert_eq!(config.resolved.retry_initial_delay_ms, 1000);
    assert_eq!(config.resolved.retry_max_delay_ms, 10000);
}

#[test]
fn test_config_missing_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("absent.toml");

    assert!(ResolvedConfigFile::from_toml_file(&config_path).is_err());
}

#[test]
fn test_config_malformed_toml_errors() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("boletines.toml");

    fs::write(&config_path, "start = ").unwrap();

    assert!(ResolvedConfigFile::from_toml_file(&config_path).is_err());
}

#[test]
fn test_config_unknown_key_errors() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("boletines.toml");

    fs::write(&config_path, "batch_size = 100\n").unwrap();

    assert!(ResolvedConfigFile::from_toml_file(&config_path).is_err());
}

#[test]
fn test_config_zero_timeout_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("boletines.toml");

    fs::write(&config_path, "request_timeout_secs = 0\n").unwrap();

    assert!(ResolvedConfigFile::from_toml_file(&config_path).is_err());
}
