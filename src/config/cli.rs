//! CLI argument parsing using clap

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// blockrand - Permuted block randomization
#[derive(Parser, Debug)]
#[command(name = "blockrand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file (CLI options take precedence)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // === Request Options ===
    /// Target sample size (number of subjects)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub sample_size: Option<i64>,

    /// Number of subjects per block (must be a multiple of the treatment count)
    #[arg(short = 'b', long, allow_negative_numbers = true)]
    pub block_size: Option<i64>,

    /// Number of treatment groups
    #[arg(short = 't', long, allow_negative_numbers = true)]
    pub treatments: Option<i64>,

    // === Policy Options ===
    /// Allow up to 26 treatments (labels A-Z)
    #[arg(long, conflicts_with = "max_treatments")]
    pub full_alphabet: bool,

    /// Override the treatment ceiling (at most 26)
    #[arg(long)]
    pub max_treatments: Option<usize>,

    // === Output Options ===
    /// Seed for a reproducible sequence
    #[arg(long, env = "BLOCKRAND_SEED")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: Level,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
