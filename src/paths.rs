//! Centralized path definitions for globlab
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.globlab/
//! └── config.toml               # Default limit, custom candidate list
//! ```
//!
//! The config location can be overridden with the `GLOBLAB_CONFIG`
//! environment variable.

use std::path::PathBuf;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "GLOBLAB_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".globlab";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global globlab directory.
///
/// Returns `~/.globlab/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$GLOBLAB_CONFIG` when set and non-empty, otherwise
/// `~/.globlab/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
