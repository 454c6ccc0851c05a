//! Tests for loading game configuration from disk.

use std::io::Write;
use timeline_tictactoe::{GameConfig, GameEngine};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "side = 4").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.side(), 4);
    assert_eq!(
        config.log_file().as_deref(),
        Some(std::path::Path::new("game.log"))
    );

    let engine = GameEngine::from_config(&config);
    assert_eq!(engine.current_board().cells(), 16);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_side_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "side = 0").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Board side"));
    assert!(err.to_string().starts_with("Config error:"));
}
