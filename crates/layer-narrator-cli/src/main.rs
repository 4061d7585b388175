//! Layer Narrator CLI - prints an accessible narrative for map layers.
//!
//! Reads layer descriptions (as produced by the map viewer's layer
//! classification) as JSON and writes the text a screen reader should
//! announce.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use commands::{config as config_cmd, describe, describe::OutputFormat};
use config::Config;

/// Layer Narrator CLI - Describe map layers in plain language.
#[derive(Parser, Debug)]
#[command(
    name = "narrate",
    author,
    version,
    about = "Describe map-viewer layers in natural language",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe layers read from a JSON file (or stdin).
    Describe {
        /// JSON array of layer descriptions; `-` or omitted reads stdin.
        input: Option<PathBuf>,

        /// Write the narrative to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text or json (array of fragments).
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Leave out WMS service title, abstract and keywords.
        #[arg(long)]
        no_service_metadata: bool,

        /// Mention the metadata URL of each WMS sub-layer.
        #[arg(long)]
        metadata_urls: bool,

        /// Do not mention skipped vector features.
        #[arg(long)]
        no_skipped: bool,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Describe {
            input,
            output,
            format,
            no_service_metadata,
            metadata_urls,
            no_skipped,
        } => {
            let format: OutputFormat = format.parse()?;

            let mut describer_config = config.describer;
            if no_service_metadata {
                describer_config.include_service_metadata = false;
            }
            if metadata_urls {
                describer_config.include_metadata_urls = true;
            }
            if no_skipped {
                describer_config.mention_skipped_features = false;
            }

            describe::execute(&describer_config, input, output, format)?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
