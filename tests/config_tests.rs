//! Tests for tab strip configuration loading, saving, and defaults.

use tab_strip::config::{ConfigError, TabBarConfig, TabBarMode};

#[test]
fn defaults_match_the_documented_theme() {
    let config = TabBarConfig::default();

    assert_eq!(config.tab_bar_mode, TabBarMode::Always);
    assert_eq!(config.tab_height, 32.0);
    assert_eq!(config.tab_min_width, 120.0);
    assert_eq!(config.tab_max_width, 260.0);
    assert_eq!(config.tab_spacing, 2.0);
    assert_eq!(config.tab_corner_radius, 8.0);
    assert_eq!(config.close_button_size, 16.0);
}

#[test]
fn toml_round_trip_preserves_the_config() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("tab_strip.toml");

    let mut config = TabBarConfig::default();
    config.tab_height = 40.0;
    config.tab_bar_mode = TabBarMode::WhenMultiple;
    config.tab_active_background = [1, 2, 3];

    config.save(&path).expect("save should succeed");
    let loaded = TabBarConfig::load(&path).expect("load should succeed");

    assert_eq!(loaded, config);
}

#[test]
fn partial_file_fills_missing_fields_with_defaults() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("partial.toml");
    std::fs::write(&path, "tab_height = 48.0\n").expect("write partial config");

    let loaded = TabBarConfig::load(&path).expect("partial load should succeed");

    assert_eq!(loaded.tab_height, 48.0);
    assert_eq!(loaded.tab_min_width, 120.0, "unspecified field keeps default");
    assert_eq!(loaded.tab_bar_mode, TabBarMode::Always);
}

#[test]
fn empty_file_is_the_default_config() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "").expect("write empty config");

    let loaded = TabBarConfig::load(&path).expect("empty load should succeed");

    assert_eq!(loaded, TabBarConfig::default());
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("does_not_exist.toml");

    match TabBarConfig::load(&path) {
        Err(ConfigError::Io(_)) => {}
        other => panic!("expected ConfigError::Io, got {other:?}"),
    }
}

#[test]
fn malformed_file_surfaces_a_parse_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "tab_height = \"not a number\"\n").expect("write broken config");

    match TabBarConfig::load(&path) {
        Err(ConfigError::Parse(_)) => {}
        other => panic!("expected ConfigError::Parse, got {other:?}"),
    }
}

#[test]
fn tab_bar_mode_uses_snake_case_on_disk() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let path = dir.path().join("mode.toml");
    std::fs::write(&path, "tab_bar_mode = \"when_multiple\"\n").expect("write mode config");

    let loaded = TabBarConfig::load(&path).expect("mode load should succeed");
    assert_eq!(loaded.tab_bar_mode, TabBarMode::WhenMultiple);
}
