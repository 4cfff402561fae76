//! JSON output formatting
//!
//! The report wraps the result object with generation metadata:
//!
//! ```json
//! {
//!   "generatedAt": "2024-05-01T12:00:00+00:00",
//!   "seed": 42,
//!   "result": { "sequence": [...], "targetSampleSize": 24, ... }
//! }
//! ```

use crate::randomizer::GenerationResult;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON report envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub result: &'a GenerationResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a GenerationResult, seed: Option<u64>) -> Self {
        Self {
            generated_at: Utc::now(),
            seed,
            result,
        }
    }
}

/// Write the report as pretty-printed JSON followed by a newline
pub fn write_report<W: Write>(report: &Report<'_>, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
