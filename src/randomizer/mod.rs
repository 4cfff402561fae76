//! Permuted block randomization
//!
//! Subjects are split into blocks of `block_size`. Every block holds each
//! treatment exactly `block_size / num_treatments` times, and the order inside
//! each block is an independent uniform permutation.
//!
//! # Algorithm
//!
//! 1. Validate the request against the [`Policy`] (first failure wins)
//! 2. `num_blocks = ceil(target / block_size)`, rounding the allocation up to
//!    `num_blocks * block_size` with a warning when it differs from the target
//! 3. For each block, lay out the balanced template (`AA BB CC`) and apply a
//!    Fisher-Yates shuffle drawn from the caller's [`RandomSource`]
//! 4. Tag each entry with its block index and running subject index
//!
//! Generation keeps no state between calls. A [`BlockRandomizer`] only holds
//! its policy, so it can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use blockrand::randomizer::{BlockRandomizer, GenerationRequest};
//! use blockrand::random::xoshiro::XoshiroSource;
//!
//! let randomizer = BlockRandomizer::default();
//! let mut source = XoshiroSource::with_seed(1);
//! let allocation = randomizer
//!     .generate_with(GenerationRequest::new(25, 6, 3), &mut source)
//!     .unwrap();
//!
//! assert_eq!(allocation.num_blocks, 5);
//! assert_eq!(allocation.actual_allocation_size, 30);
//! assert!(allocation.warning.is_some());
//! ```

pub mod error;
pub mod policy;
pub mod types;

pub use error::GenerationError;
pub use policy::Policy;
pub use types::{
    Allocation, Assignment, Failure, GenerationRequest, GenerationResult, TreatmentLabel,
    ALPHABET_SIZE,
};

use crate::random::xoshiro::XoshiroSource;
use crate::random::RandomSource;
use tracing::{debug, error, info};

/// Validated request, all values in range
#[derive(Debug, Clone, Copy)]
struct Plan {
    target_sample_size: usize,
    block_size: usize,
    num_treatments: usize,
    num_blocks: usize,
    actual_allocation_size: usize,
}

/// Block randomizer bound to a parameter policy
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRandomizer {
    policy: Policy,
}

impl BlockRandomizer {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Generate with an entropy-seeded source
    pub fn generate(&self, request: GenerationRequest) -> GenerationResult {
        let mut source = XoshiroSource::new();
        self.generate_with(request, &mut source).into()
    }

    /// Generate drawing all randomness from `source`
    pub fn generate_with<R: RandomSource + ?Sized>(
        &self,
        request: GenerationRequest,
        source: &mut R,
    ) -> Result<Allocation, GenerationError> {
        let plan = self.plan(request)?;
        debug!(
            target_sample_size = plan.target_sample_size,
            block_size = plan.block_size,
            num_treatments = plan.num_treatments,
            num_blocks = plan.num_blocks,
            actual_allocation_size = plan.actual_allocation_size,
            "Planned allocation"
        );

        let warning = if plan.actual_allocation_size != plan.target_sample_size {
            info!(
                target_sample_size = plan.target_sample_size,
                actual_allocation_size = plan.actual_allocation_size,
                "Allocation rounded up to a whole number of blocks"
            );
            Some(format!(
                "Target sample size ({}) is not a multiple of block size ({}). Allocation generated for {} subjects.",
                plan.target_sample_size, plan.block_size, plan.actual_allocation_size
            ))
        } else {
            None
        };

        let labels = TreatmentLabel::first(plan.num_treatments);
        let per_treatment = plan.block_size / plan.num_treatments;

        let mut sequence = Vec::with_capacity(plan.actual_allocation_size);
        let mut subject_index = 0;
        for block_index in 0..plan.num_blocks {
            let mut block = block_template(&labels, per_treatment);
            shuffle(&mut block, source);

            for treatment in block {
                sequence.push(Assignment {
                    treatment,
                    block_index,
                    subject_index,
                });
                subject_index += 1;
            }
        }

        check_consistency(sequence.len(), plan.actual_allocation_size)?;

        Ok(Allocation {
            sequence,
            target_sample_size: plan.target_sample_size,
            actual_allocation_size: plan.actual_allocation_size,
            num_blocks: plan.num_blocks,
            block_size: plan.block_size,
            num_treatments: plan.num_treatments,
            warning,
        })
    }

    /// Validate in order and compute block count and allocation size
    fn plan(&self, request: GenerationRequest) -> Result<Plan, GenerationError> {
        let policy = &self.policy;

        let target_sample_size = in_bounds(
            request.target_sample_size,
            policy.min_sample_size,
            policy.max_sample_size,
        )
        .ok_or(GenerationError::InvalidSampleSize {
            value: request.target_sample_size,
            min: policy.min_sample_size,
            max: policy.max_sample_size,
        })?;

        // At least one treatment, whatever the policy says
        let min_treatments = policy.min_treatments.max(1);
        let max_treatments = policy.effective_max_treatments();
        let num_treatments = in_bounds(request.num_treatments, min_treatments, max_treatments)
            .ok_or(GenerationError::InvalidTreatmentCount {
                value: request.num_treatments,
                min: min_treatments,
                max: max_treatments,
            })?;

        let max_block_size = policy.max_block_size.unwrap_or(usize::MAX);
        let block_size = in_bounds(request.block_size, 1, max_block_size).ok_or(
            GenerationError::InvalidBlockSize {
                value: request.block_size,
                max: policy.max_block_size,
            },
        )?;

        if block_size < num_treatments {
            return Err(GenerationError::BlockTooSmall {
                block_size,
                num_treatments,
            });
        }

        if block_size % num_treatments != 0 {
            return Err(GenerationError::UnbalancedBlock {
                block_size,
                num_treatments,
            });
        }

        let num_blocks = target_sample_size.div_ceil(block_size);

        Ok(Plan {
            target_sample_size,
            block_size,
            num_treatments,
            num_blocks,
            actual_allocation_size: num_blocks * block_size,
        })
    }
}

/// Generate with the default policy and an entropy-seeded source
///
/// ```
/// let result = blockrand::randomizer::generate(24, 5, 3);
/// assert!(result.error().is_some());
/// assert!(result.sequence().is_empty());
/// ```
pub fn generate(
    target_sample_size: i64,
    block_size: i64,
    num_treatments: i64,
) -> GenerationResult {
    BlockRandomizer::default().generate(GenerationRequest::new(
        target_sample_size,
        block_size,
        num_treatments,
    ))
}

/// Balanced, unshuffled block: each label repeated `per_treatment` times, in label order
pub fn block_template(labels: &[TreatmentLabel], per_treatment: usize) -> Vec<TreatmentLabel> {
    let mut block = Vec::with_capacity(labels.len() * per_treatment);
    for &label in labels {
        block.extend(std::iter::repeat(label).take(per_treatment));
    }
    block
}

/// Fisher-Yates shuffle in place
///
/// Walks from the last position down, swapping each with a uniformly drawn
/// index in `[0, position]`. With a uniform source every ordering is equally
/// likely.
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], source: &mut R) {
    for position in (1..items.len()).rev() {
        let pick = source.next_index(position + 1);
        items.swap(position, pick);
    }
}

fn check_consistency(generated: usize, expected: usize) -> Result<(), GenerationError> {
    if generated != expected {
        error!(generated, expected, "Generated sequence length mismatch");
        return Err(GenerationError::InternalInconsistency { generated, expected });
    }
    Ok(())
}

/// `value` as usize if it lies in `[min, max]`
fn in_bounds(value: i64, min: usize, max: usize) -> Option<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v >= min && *v <= max)
}
