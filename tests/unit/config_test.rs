//! Tests for global configuration management

use std::fs;

use globlab::DEFAULT_LIMIT;
use globlab::catalog::SAMPLE_FILES;
use globlab::config::GlobalConfig;
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = GlobalConfig::default();
    assert_eq!(config.matching.limit, DEFAULT_LIMIT);
    assert!(config.catalog.files.is_empty());
}

#[test]
fn test_default_candidates_fall_back_to_samples() {
    let config = GlobalConfig::default();
    let candidates = config.default_candidates();
    assert_eq!(candidates.len(), SAMPLE_FILES.len());
    assert_eq!(candidates[0], "notes.txt");
}

#[test]
fn test_default_candidates_from_catalog() {
    let mut config = GlobalConfig::default();
    config.catalog.files = vec!["main.rs".to_string(), "lib.rs".to_string()];
    assert_eq!(config.default_candidates(), vec!["main.rs", "lib.rs"]);
}

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_config_partial_file() {
    let config: GlobalConfig = toml::from_str("[matching]\nlimit = 3\n").unwrap();
    assert_eq!(config.matching.limit, 3);
    assert!(config.catalog.files.is_empty());

    let config: GlobalConfig = toml::from_str("[matching]\n").unwrap();
    assert_eq!(config.matching.limit, DEFAULT_LIMIT);

    let config: GlobalConfig = toml::from_str("").unwrap();
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_config_save_and_load() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("nested/config.toml");

    let mut config = GlobalConfig::default();
    config.matching.limit = 20;
    config.catalog.files = vec!["a.txt".to_string(), "b.log".to_string()];

    config.save_to(&config_path).unwrap();
    let loaded = GlobalConfig::load_from(&config_path).unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_config_load_from_reports_parse_errors() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[matching]\nlimit = \"lots\"\n").unwrap();

    let err = GlobalConfig::load_from(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn test_config_load_from_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(GlobalConfig::load_from(&temp.path().join("missing.toml")).is_err());
}
