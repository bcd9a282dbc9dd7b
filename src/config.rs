//! Configuration file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::ConfidenceConfig;
use crate::core::script::Script;
use crate::engine::DEFAULT_QUALITY_WARNING;
use crate::error::ConfigError;

/// lipi configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LipiConfig {
    /// Scripts produced by `transliterate_all` when none are given
    #[serde(default = "default_targets")]
    pub targets: Vec<Script>,
    /// Reports whose overall quality falls below this are flagged
    #[serde(default = "default_quality_warning_threshold")]
    pub quality_warning_threshold: f64,
    /// Per-strategy confidence values
    #[serde(default)]
    pub confidence: ConfidenceConfig,
}

fn default_targets() -> Vec<Script> {
    Script::ALL.to_vec()
}

fn default_quality_warning_threshold() -> f64 {
    DEFAULT_QUALITY_WARNING
}

impl Default for LipiConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            quality_warning_threshold: default_quality_warning_threshold(),
            confidence: ConfidenceConfig::default(),
        }
    }
}

/// Config file path: `$XDG_CONFIG_HOME/lipi/config.json`, else
/// `~/.config/lipi/config.json`
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };

    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // no usable HOME: fall back to a writable system dir
            PathBuf::from("/var/tmp")
        });
    base.join("lipi").join("config.json")
}

/// Load the config (defaults when the file is missing or invalid)
pub fn load_config() -> LipiConfig {
    let path = config_path();
    if !path.exists() {
        return LipiConfig::default();
    }
    load_config_from(&path).unwrap_or_else(|e| {
        log::warn!("ignoring config file {}: {}", path.display(), e);
        LipiConfig::default()
    })
}

pub fn load_config_from(path: &Path) -> Result<LipiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: LipiConfig = serde_json::from_str(&content)?;
    if config.targets.is_empty() {
        config.targets = default_targets();
    }
    Ok(config)
}

/// Save the config, creating parent directories
pub fn save_config(config: &LipiConfig) -> Result<(), ConfigError> {
    save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: &LipiConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
