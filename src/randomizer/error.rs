//! Generation errors

use thiserror::Error;

/// Reasons a generation request is refused
///
/// Every variant except [`GenerationError::InternalInconsistency`] is an
/// input-validation failure: retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Target sample size outside the policy bound
    #[error("Target Sample Size must be between {min} and {max}.")]
    InvalidSampleSize { value: i64, min: usize, max: usize },

    /// Treatment count outside the policy bound
    #[error("Number of Treatments must be between {min} and {max}.")]
    InvalidTreatmentCount { value: i64, min: usize, max: usize },

    /// Block size not positive, or above an optional policy ceiling
    #[error("{}", block_size_message(.value, .max))]
    InvalidBlockSize { value: i64, max: Option<usize> },

    /// A block cannot hold one subject of every treatment
    #[error("Block Size ({block_size}) must be greater than or equal to the number of treatments ({num_treatments}).")]
    BlockTooSmall { block_size: usize, num_treatments: usize },

    /// Equal allocation within a block is not representable
    #[error("Block size ({block_size}) must be divisible by the number of treatments ({num_treatments}) to ensure equal allocation within blocks.")]
    UnbalancedBlock { block_size: usize, num_treatments: usize },

    /// Generated sequence length disagrees with the computed allocation size
    #[error("Internal error: Generated sequence length ({generated}) does not match calculated allocation size ({expected}).")]
    InternalInconsistency { generated: usize, expected: usize },
}

fn block_size_message(value: &i64, max: &Option<usize>) -> String {
    match max {
        Some(max) if *value > 0 => format!("Block Size ({}) must not exceed {}.", value, max),
        _ => "Block Size must be a positive number.".to_string(),
    }
}

impl GenerationError {
    /// Stable machine-readable name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::InvalidSampleSize { .. } => "InvalidSampleSize",
            GenerationError::InvalidTreatmentCount { .. } => "InvalidTreatmentCount",
            GenerationError::InvalidBlockSize { .. } => "InvalidBlockSize",
            GenerationError::BlockTooSmall { .. } => "BlockTooSmall",
            GenerationError::UnbalancedBlock { .. } => "UnbalancedBlock",
            GenerationError::InternalInconsistency { .. } => "InternalInconsistency",
        }
    }

    /// True for logic bugs rather than bad input
    pub fn is_internal(&self) -> bool {
        matches!(self, GenerationError::InternalInconsistency { .. })
    }
}
