//! Global configuration management
//!
//! Config is stored at `~/.globlab/config.toml` unless `GLOBLAB_CONFIG`
//! points elsewhere.
//!
//! ```toml
//! [matching]
//! limit = 8
//!
//! [catalog]
//! files = ["main.rs", "lib.rs", "README.md"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::SAMPLE_FILES;
use crate::core::services::DEFAULT_LIMIT;
use crate::paths;

/// Global globlab configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Matching preferences
    #[serde(default)]
    pub matching: MatchingConfig,
    /// Default candidate list
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Matching preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// How many matches to show
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Default candidate list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Candidate names used when none are given (empty = built-in samples)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|err| {
            warn!("ignoring config {}: {err:#}", path.display());
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Candidates to use when the caller supplies none
    #[must_use]
    pub fn default_candidates(&self) -> Vec<String> {
        if self.catalog.files.is_empty() {
            SAMPLE_FILES.iter().map(ToString::to_string).collect()
        } else {
            self.catalog.files.clone()
        }
    }
}
