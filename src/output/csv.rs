//! CSV output formatting
//!
//! One row per subject, 1-based numbering, ready for a spreadsheet or an
//! allocation concealment list:
//!
//! ```text
//! subject,block,treatment
//! 1,1,B
//! 2,1,A
//! ```

use crate::randomizer::GenerationResult;
use crate::Result;
use std::io::Write;

/// Header row
pub const HEADER: &str = "subject,block,treatment";

/// Write the sequence as CSV
///
/// A failed generation has nothing to tabulate and is returned as an error.
pub fn write_result<W: Write>(result: &GenerationResult, out: &mut W) -> Result<()> {
    let allocation = match result {
        GenerationResult::Success(allocation) => allocation,
        GenerationResult::Failure(failure) => anyhow::bail!("{}", failure.error),
    };

    writeln!(out, "{}", HEADER)?;
    for assignment in &allocation.sequence {
        writeln!(
            out,
            "{},{},{}",
            assignment.subject_index + 1,
            assignment.block_index + 1,
            assignment.treatment
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::scripted::ScriptedSource;
    use crate::randomizer::{BlockRandomizer, GenerationRequest};

    #[test]
    fn test_rows() {
        let mut source = ScriptedSource::identity();
        let result: GenerationResult = BlockRandomizer::default()
            .generate_with(GenerationRequest::new(4, 2, 2), &mut source)
            .into();

        let mut out = Vec::new();
        write_result(&result, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "subject,block,treatment\n1,1,A\n2,1,B\n3,2,A\n4,2,B\n"
        );
    }

    #[test]
    fn test_failure_is_error() {
        let result = crate::randomizer::generate(24, 2, 3);
        let mut out = Vec::new();
        let err = write_result(&result, &mut out).unwrap_err();
        assert!(err.to_string().contains("greater than or equal"));
        assert!(out.is_empty());
    }
}
