//! Describe command implementation.
//!
//! Reads layer descriptions as JSON and prints their narrative.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use layer_narrator::{read_descriptions, Describer, DescriberConfig, LayerDescription};
use tracing::info;

/// Output format for the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Joined narrative text.
    Text,
    /// JSON array of fragments.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'text' or 'json'", s),
        }
    }
}

/// Describe the layers read from `input` (stdin for `None` or `-`).
pub fn execute(
    config: &DescriberConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let descriptions = load_descriptions(input.as_deref())?;
    info!(layers = descriptions.len(), ?format, "Describing layers");

    let rendered = render(config, &descriptions, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write output to: {}", path.display()))?;
            eprintln!("Output written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Render the narrative for `descriptions` in the requested format.
pub fn render(
    config: &DescriberConfig,
    descriptions: &[LayerDescription],
    format: OutputFormat,
) -> Result<String> {
    let fragments = Describer::with_config(config.clone()).describe(descriptions);

    let mut rendered = match format {
        OutputFormat::Text => fragments.concat(),
        OutputFormat::Json => serde_json::to_string_pretty(&fragments)?,
    };
    rendered.push('\n');
    Ok(rendered)
}

fn load_descriptions(input: Option<&Path>) -> Result<Vec<LayerDescription>> {
    match input {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open input: {}", path.display()))?;
            read_descriptions(file)
                .with_context(|| format!("Failed to read layer descriptions from {}", path.display()))
        }
        _ => read_descriptions(std::io::stdin().lock())
            .context("Failed to read layer descriptions from stdin"),
    }
}
