//! Parameter bounds for generation

use serde::{Deserialize, Serialize};

use super::types::ALPHABET_SIZE;

/// Closed bounds applied to every generation request
///
/// The treatment ceiling defaults to 10 (labels A-J). Use
/// [`Policy::full_alphabet`] to allow up to 26 (A-Z). A ceiling above the
/// alphabet size is clamped when requests are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Smallest accepted target sample size
    pub min_sample_size: usize,
    /// Largest accepted target sample size
    pub max_sample_size: usize,
    /// Smallest accepted number of treatments
    pub min_treatments: usize,
    /// Largest accepted number of treatments
    pub max_treatments: usize,
    /// Largest accepted block size (unbounded when absent)
    pub max_block_size: Option<usize>,
}

impl Policy {
    /// Default bounds with the treatment ceiling raised to the full alphabet
    pub fn full_alphabet() -> Self {
        Self {
            max_treatments: ALPHABET_SIZE,
            ..Self::default()
        }
    }

    /// Treatment ceiling actually enforced
    pub fn effective_max_treatments(&self) -> usize {
        self.max_treatments.min(ALPHABET_SIZE)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_sample_size: 2,
            max_sample_size: 500,
            min_treatments: 2,
            max_treatments: 10,
            max_block_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let policy = Policy::default();
        assert_eq!((policy.min_sample_size, policy.max_sample_size), (2, 500));
        assert_eq!((policy.min_treatments, policy.max_treatments), (2, 10));
        assert!(policy.max_block_size.is_none());
    }

    #[test]
    fn test_full_alphabet() {
        let policy = Policy::full_alphabet();
        assert_eq!(policy.max_treatments, 26);
        assert_eq!(policy.max_sample_size, 500);
    }

    #[test]
    fn test_ceiling_clamped_to_alphabet() {
        let policy = Policy { max_treatments: 40, ..Policy::default() };
        assert_eq!(policy.effective_max_treatments(), 26);
    }
}
