//! Tests for loading configuration files.

use simon_says::GameConfig;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
level = 3
bell = false
log_file = "game.log"

[timing]
step_ms = 450
light_ms = 350
settle_ms = 800
advance_ms = 700
"#,
    );

    let config = GameConfig::load(file.path()).expect("valid config");
    assert_eq!(*config.level(), 3);
    assert!(!*config.bell());
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(*config.timing().step_ms(), 450);
    assert_eq!(*config.timing().light_ms(), 350);
    assert_eq!(*config.timing().settle_ms(), 800);
    assert_eq!(*config.timing().advance_ms(), 700);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = GameConfig::load(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let file = write_config("level = [");
    let err = GameConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_zero_step_rejected() {
    let file = write_config("[timing]\nstep_ms = 0\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Invalid timing"));
}
