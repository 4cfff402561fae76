//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Precedence is CLI over TOML over built-in defaults.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::randomizer::{GenerationRequest, Policy};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Parameter bounds
    #[serde(default)]
    pub policy: Policy,
    /// Parameters of the allocation to generate
    #[serde(default)]
    pub request: RequestConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Request handed to the randomizer
    pub fn generation_request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.request.sample_size,
            self.request.block_size,
            self.request.treatments,
        )
    }
}

/// Generation parameters
///
/// Values are not range-checked here; the randomizer reports out-of-range
/// values as generation failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Target number of subjects
    pub sample_size: i64,
    /// Subjects per block
    pub block_size: i64,
    /// Number of treatment groups
    pub treatments: i64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            sample_size: 24,
            block_size: 6,
            treatments: 3,
        }
    }
}

/// Rendering format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks with legend
    #[default]
    Text,
    /// Result object as JSON
    Json,
    /// One row per subject
    Csv,
}

impl OutputFormat {
    /// Whether the rendered output carries the rounding warning itself
    pub fn includes_warning(self) -> bool {
        match self {
            OutputFormat::Text | OutputFormat::Json => true,
            OutputFormat::Csv => false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Output file path (stdout when absent)
    pub path: Option<PathBuf>,
    /// Seed for a reproducible sequence (entropy when absent)
    pub seed: Option<u64>,
}

/// Build the effective configuration from CLI arguments and optional TOML file
pub fn load(cli: &cli::Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => toml::parse_toml_file(path)?,
        None => Config::default(),
    };

    let config = toml::merge_cli_with_config(cli, config);
    validator::validate_config(&config).context("Configuration validation failed")?;

    Ok(config)
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Request: {}", self.request)?;
        writeln!(
            f,
            "  Policy: sample_size={}..={}, treatments={}..={}",
            self.policy.min_sample_size,
            self.policy.max_sample_size,
            self.policy.min_treatments,
            self.policy.max_treatments
        )?;
        if let Some(max) = self.policy.max_block_size {
            writeln!(f, "  Max block size: {}", max)?;
        }
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sample_size={}, block_size={}, treatments={}",
            self.sample_size, self.block_size, self.treatments
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}", self.format)?;
        match &self.path {
            Some(path) => write!(f, ", path={}", path.display())?,
            None => write!(f, ", path=stdout")?,
        }
        if let Some(seed) = self.seed {
            write!(f, ", seed={}", seed)?;
        }
        Ok(())
    }
}
