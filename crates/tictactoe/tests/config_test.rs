//! Tests for loading configuration files.

use std::io::Write;
use std::path::PathBuf;
use tictactoe::{AppConfig, Theme};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_file = "/tmp/board.log"

[theme]
background = [10, 20, 30]
"#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/board.log"));
    assert_eq!(config.theme().background(), &[10, 20, 30]);
    assert_eq!(config.theme().cell(), Theme::default().cell());
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_value_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[theme]\nbutton = [300, 0, 0]").unwrap();

    assert!(AppConfig::from_file(file.path()).is_err());
}

#[test]
fn test_default_palette() {
    let theme = Theme::default();
    assert_eq!(theme.background(), &[0, 47, 108]);
    assert_eq!(theme.button(), &[33, 150, 243]);
    assert_eq!(theme.cell(), &[122, 203, 226]);
}
