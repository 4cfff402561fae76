//! blockrand CLI entry point

use anyhow::{Context, Result};
use blockrand::config::{self, cli::Cli, Config, OutputFormat};
use blockrand::random::xoshiro::XoshiroSource;
use blockrand::{output, BlockRandomizer, GenerationResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

/// Exit status when the request itself is refused
const EXIT_GENERATION_FAILED: u8 = 2;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    // Logs go to stderr so stdout stays clean for piped output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;

    let config = config::load(&cli)?;
    debug!("{}", config);

    let result = run(&config)?;

    if let Some(error) = result.error() {
        // Blocking message; nothing else was written
        eprintln!("Error: {}", error);
        return Ok(ExitCode::from(EXIT_GENERATION_FAILED));
    }

    Ok(ExitCode::SUCCESS)
}

/// Generate once and render according to the configuration
fn run(config: &Config) -> Result<GenerationResult> {
    let randomizer = BlockRandomizer::new(config.policy);
    let mut source = XoshiroSource::from_optional_seed(config.output.seed);

    let result: GenerationResult = randomizer
        .generate_with(config.generation_request(), &mut source)
        .into();

    match result.allocation() {
        Some(allocation) => {
            info!(
                subjects = allocation.actual_allocation_size,
                blocks = allocation.num_blocks,
                "Generated allocation"
            );
            if !config.output.format.includes_warning() {
                if let Some(warning) = &allocation.warning {
                    eprintln!("Warning: {}", warning);
                }
            }
        }
        // Only JSON carries a failure object; other formats leave it to the caller
        None if config.output.format != OutputFormat::Json => return Ok(result),
        None => {}
    }

    match &config.output.path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            output::render(&result, config.output.format, config.output.seed, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            output::render(&result, config.output.format, config.output.seed, &mut writer)?;
        }
    }

    Ok(result)
}
