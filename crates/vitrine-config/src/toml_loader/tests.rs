//! Tests for settings loading and default file creation.

use super::*;
use std::path::Path;

use vitrine_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_vitrine_settings.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[refresh]
settle_delay_ms = 500

[browser]
auth_server_allowlist = ["*.corp.example"]
"#,
    )
    .unwrap();

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.refresh.settle_delay_ms, 500);
    assert_eq!(settings.browser.auth_server_allowlist, vec!["*.corp.example"]);
    // Defaults preserved
    assert_eq!(settings.refresh.recheck_delay_ms, 2000);
    assert_eq!(settings.edit.min_window_size, 200);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn out_of_range_values_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[edit]\nresize_margin = 500\n").unwrap();

    let settings = load_from_path(&path).unwrap();
    assert_eq!(settings.edit.resize_margin, 500);
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let settings = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(settings.refresh.default_interval_secs, 60);

    // The template itself must parse to defaults.
    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.files.layouts, "layouts.json");
    assert_eq!(reloaded.browser.cache_max_mb, 512);
}
