//! Rendering of generation results
//!
//! Renderers write to any `std::io::Write`. The CLI points them at stdout or
//! a file; tests point them at a `Vec<u8>`.

pub mod csv;
pub mod json;
pub mod text;

use crate::config::OutputFormat;
use crate::randomizer::GenerationResult;
use crate::Result;
use std::io::Write;

/// Render `result` in `format`
///
/// `seed` is recorded in formats that carry metadata (JSON).
pub fn render<W: Write>(
    result: &GenerationResult,
    format: OutputFormat,
    seed: Option<u64>,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_result(result, out),
        OutputFormat::Json => json::write_report(&json::Report::new(result, seed), out),
        OutputFormat::Csv => csv::write_result(result, out),
    }
}
