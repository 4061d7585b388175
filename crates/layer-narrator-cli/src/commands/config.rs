//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::Result;
use layer_narrator::DescriberConfig;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("Layer Narrator Configuration");
    println!("{:-<40}", "");

    for key in DescriberConfig::KEYS {
        let value = config.describer.get(key).unwrap_or_default();
        println!("{:<28} {}", key, value);
    }

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let key = normalize_key(key);
    config.describer.set(&key, value)?;
    config.save()?;
    println!("Set {} to: {}", key, value);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let key = normalize_key(key);
    match config.describer.get(&key) {
        Some(value) => println!("{}", value),
        None => anyhow::bail!(
            "Unknown config key: {}. Valid keys: {}",
            key,
            DescriberConfig::KEYS.join(", ")
        ),
    }
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

/// Accept `include-metadata-urls` as well as `include_metadata_urls`.
fn normalize_key(key: &str) -> String {
    key.trim().replace('-', "_")
}
