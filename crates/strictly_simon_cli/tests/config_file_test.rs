//! Tests for loading configuration from disk.

use std::io::Write;
use strictly_simon_cli::SimonConfig;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "start_length = 6\ngrowth = 2\nmax_rounds = 10\nseed = 1234").unwrap();

    let config = SimonConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.start_length(), 6);
    assert_eq!(*config.growth(), 2);
    assert_eq!(*config.max_rounds(), 10);
    assert_eq!(config.seed(), &Some(1234));
    assert_eq!(config.log_level(), "warn");
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "growth = 100").unwrap();

    let err = SimonConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("growth"));
}

#[test]
fn test_malformed_toml_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "start_length = \"four\"").unwrap();

    let err = SimonConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SimonConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SimonConfig::default());
}
