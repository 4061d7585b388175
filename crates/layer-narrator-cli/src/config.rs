//! CLI configuration management.
//!
//! Precedence, lowest first: defaults, the config file, environment
//! variables (a `.env` file is honoured), command line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use layer_narrator::DescriberConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variables overriding describer switches.
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("NARRATOR_SERVICE_METADATA", "include_service_metadata"),
    ("NARRATOR_METADATA_URLS", "include_metadata_urls"),
    ("NARRATOR_SKIPPED_FEATURES", "mention_skipped_features"),
];

/// Application-wide configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Switches for the generated narrative.
    #[serde(default)]
    pub describer: DescriberConfig,
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Override describer switches from environment lookups.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = lookup(var) {
                self.describer
                    .set(key, &value)
                    .with_context(|| format!("Invalid value for {}", var))?;
            }
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            self.save_to(&config_path)?;
        }
        Ok(())
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "layer-narrator", "narrate")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
