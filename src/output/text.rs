//! Human-readable text output
//!
//! ```text
//! Target Sample Size: 25 | Actual Allocation Size: 30 | Blocks: 5 | Block Size: 6 | Treatments: 3
//! Warning: Target sample size (25) is not a multiple of block size (6). ...
//!
//! Legend: A = Treatment A, B = Treatment B, C = Treatment C
//!
//! Block 1:   1:B  2:A  3:C  4:A  5:C  6:B
//! ...
//! ```
//!
//! Block and subject numbers are 1-based for display.

use crate::randomizer::{Allocation, GenerationResult};
use crate::Result;
use std::io::Write;

/// Write a result; failures render as a single blocking error line
pub fn write_result<W: Write>(result: &GenerationResult, out: &mut W) -> Result<()> {
    match result {
        GenerationResult::Success(allocation) => write_allocation(allocation, out),
        GenerationResult::Failure(failure) => {
            writeln!(out, "Error: {}", failure.error)?;
            Ok(())
        }
    }
}

/// Write header, legend, blocks and totals
pub fn write_allocation<W: Write>(allocation: &Allocation, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Target Sample Size: {} | Actual Allocation Size: {} | Blocks: {} | Block Size: {} | Treatments: {}",
        allocation.target_sample_size,
        allocation.actual_allocation_size,
        allocation.num_blocks,
        allocation.block_size,
        allocation.num_treatments
    )?;
    if let Some(warning) = &allocation.warning {
        writeln!(out, "Warning: {}", warning)?;
    }
    writeln!(out)?;

    writeln!(out, "Legend: {}", legend(allocation))?;
    writeln!(out)?;

    // Pad subject numbers to the widest one
    let width = allocation.actual_allocation_size.to_string().len();
    let label_width = format!("Block {}:", allocation.num_blocks).len();

    for (block_index, block) in allocation.blocks().enumerate() {
        let label = format!("Block {}:", block_index + 1);
        write!(out, "{:<label_width$}", label, label_width = label_width)?;
        for assignment in block {
            write!(
                out,
                " {:>width$}:{}",
                assignment.subject_index + 1,
                assignment.treatment,
                width = width
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Totals:")?;
    for (label, count) in allocation.treatment_totals() {
        writeln!(out, "  Treatment {}: {} subjects", label, count)?;
    }

    Ok(())
}

fn legend(allocation: &Allocation) -> String {
    allocation
        .labels()
        .iter()
        .map(|label| format!("{} = Treatment {}", label, label))
        .collect::<Vec<_>>()
        .join(", ")
}
