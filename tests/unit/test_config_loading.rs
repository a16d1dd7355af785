//! Unit Tests for Configuration Loading

use std::fs;
use tempfile::TempDir;
use termo::config::{loader::ConfigLoader, Config, StderrMode};
use termo::error::Error;

#[test]
fn test_load_partial_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
font_family = "Fira Code"
fullscreen = true

[shell]
env_var = "TERMO_SHELL"
fallback = "/bin/dash"
stderr = "discard"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.ui.font_family, "Fira Code");
    assert!(config.ui.fullscreen);
    assert_eq!(config.ui.font_size, 14.0);
    assert_eq!(config.shell.env_var, "TERMO_SHELL");
    assert_eq!(
        config.shell.fallback.as_deref(),
        Some(std::path::Path::new("/bin/dash"))
    );
    assert_eq!(config.shell.stderr, StderrMode::Discard);
}

#[test]
fn test_load_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "ui": { "font_size": 22.0 } }"#).unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.ui.font_size, 22.0);
    assert_eq!(config.shell, Config::default().shell);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui\nfont_size = ").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigParseFailed { .. })
    ));
}

#[test]
fn test_invalid_values_fail_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[ui]\nfont_size = 500.0\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigValidationFailed { .. })
    ));
}

#[test]
fn test_search_path_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("config.toml"), "[ui]\nfont_size = 11.0\n").unwrap();
    fs::write(first.path().join("config.json"), r#"{ "ui": { "font_size": 9.0 } }"#).unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![
        first.path().join("config"),
        second.path().join("config"),
    ]);
    let config = loader.load_first().unwrap();

    assert_eq!(config.ui.font_size, 9.0);
    assert_eq!(
        loader.current_path(),
        Some(first.path().join("config.json").as_path())
    );
}

#[test]
fn test_broken_file_on_search_path_is_skipped() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("config.toml"), "not = [valid").unwrap();
    fs::write(second.path().join("config.toml"), "[ui]\nfont_size = 16.0\n").unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![
        first.path().join("config"),
        second.path().join("config"),
    ]);

    assert_eq!(loader.load_first().unwrap().ui.font_size, 16.0);
}

#[test]
fn test_json_stderr_mode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "shell": { "stderr": "merge" } }"#).unwrap();

    let config = ConfigLoader::load_from_path(&path).unwrap();
    assert_eq!(config.shell.stderr, StderrMode::Merge);
}
