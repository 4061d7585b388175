//! Configuration for the describer.

use serde::{Deserialize, Serialize};

use crate::error::{NarratorError, NarratorResult};

/// Switches for the optional parts of the narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriberConfig {
    /// Mention WMS service title, abstract, keywords and the top-level layer.
    pub include_service_metadata: bool,
    /// Append the metadata URL of each WMS sub-layer.
    pub include_metadata_urls: bool,
    /// Mention how many intersecting vector features were skipped.
    pub mention_skipped_features: bool,
}

impl Default for DescriberConfig {
    fn default() -> Self {
        Self {
            include_service_metadata: true,
            include_metadata_urls: false,
            mention_skipped_features: true,
        }
    }
}

impl DescriberConfig {
    /// Config keys accepted by [`DescriberConfig::get`] and [`DescriberConfig::set`].
    pub const KEYS: [&'static str; 3] = [
        "include_service_metadata",
        "include_metadata_urls",
        "mention_skipped_features",
    ];

    /// Parse a config document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> NarratorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get a configuration value by key.
    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "include_service_metadata" => Some(self.include_service_metadata),
            "include_metadata_urls" => Some(self.include_metadata_urls),
            "mention_skipped_features" => Some(self.mention_skipped_features),
            _ => None,
        }
    }

    /// Set a configuration value by key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> NarratorResult<()> {
        let flag = parse_flag(value)
            .ok_or_else(|| NarratorError::Config(format!("Invalid boolean: {}", value)))?;

        match key {
            "include_service_metadata" => self.include_service_metadata = flag,
            "include_metadata_urls" => self.include_metadata_urls = flag,
            "mention_skipped_features" => self.mention_skipped_features = flag,
            _ => {
                return Err(NarratorError::Config(format!("Unknown config key: {}", key)));
            }
        }
        Ok(())
    }
}

/// Accepts the usual spellings of a boolean environment value.
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
