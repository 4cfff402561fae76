//! Configuration validation
//!
//! Checks the policy bounds themselves. Request values are left to the
//! randomizer, which reports them as generation failures.

use super::*;
use crate::randomizer::ALPHABET_SIZE;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_policy(&config.policy)?;
    Ok(())
}

/// Validate policy bounds
pub fn validate_policy(policy: &Policy) -> Result<()> {
    if policy.min_sample_size == 0 {
        anyhow::bail!("min_sample_size must be at least 1");
    }

    if policy.min_sample_size > policy.max_sample_size {
        anyhow::bail!(
            "min_sample_size ({}) must not exceed max_sample_size ({})",
            policy.min_sample_size,
            policy.max_sample_size
        );
    }

    if policy.min_treatments == 0 {
        anyhow::bail!("min_treatments must be at least 1");
    }

    if policy.max_treatments > ALPHABET_SIZE {
        anyhow::bail!(
            "max_treatments must be at most {} (labels A-Z), got {}",
            ALPHABET_SIZE,
            policy.max_treatments
        );
    }

    if policy.min_treatments > policy.max_treatments {
        anyhow::bail!(
            "min_treatments ({}) must not exceed max_treatments ({})",
            policy.min_treatments,
            policy.max_treatments
        );
    }

    if let Some(max_block_size) = policy.max_block_size {
        if max_block_size < policy.min_treatments {
            anyhow::bail!(
                "max_block_size ({}) must be at least min_treatments ({})",
                max_block_size,
                policy.min_treatments
            );
        }
    }

    Ok(())
}
