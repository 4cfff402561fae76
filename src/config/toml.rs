//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    // Override request
    if let Some(sample_size) = cli.sample_size {
        config.request.sample_size = sample_size;
    }
    if let Some(block_size) = cli.block_size {
        config.request.block_size = block_size;
    }
    if let Some(treatments) = cli.treatments {
        config.request.treatments = treatments;
    }

    // Override treatment ceiling
    if cli.full_alphabet {
        config.policy.max_treatments = crate::randomizer::ALPHABET_SIZE;
    } else if let Some(max) = cli.max_treatments {
        config.policy.max_treatments = max;
    }

    // Override output
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(path) = &cli.output {
        config.output.path = Some(path.clone());
    }
    if cli.seed.is_some() {
        config.output.seed = cli.seed;
    }

    config
}
