//! Xoshiro-backed random source
//!
//! Default source for generation. Uses the xoshiro256++ PRNG, which is fast
//! and has good statistical properties. It is not cryptographically secure,
//! which is fine for teaching and simulation use.
//!
//! # Example
//!
//! ```
//! use blockrand::random::{RandomSource, xoshiro::XoshiroSource};
//!
//! let mut a = XoshiroSource::with_seed(12345);
//! let mut b = XoshiroSource::with_seed(12345);
//! assert_eq!(a.next_index(100), b.next_index(100));
//! ```

use super::RandomSource;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform random source over xoshiro256++
#[derive(Debug, Clone)]
pub struct XoshiroSource {
    rng: Xoshiro256PlusPlus,
}

impl XoshiroSource {
    /// Create a new source with random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a new source with specific seed
    ///
    /// Useful for reproducible allocation lists and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for XoshiroSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for XoshiroSource {
    #[inline(always)]
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xoshiro_basic() {
        let mut source = XoshiroSource::new();

        for _ in 0..100 {
            let index = source.next_index(1000);
            assert!(index < 1000);
        }
    }

    #[test]
    fn test_xoshiro_zero_bound() {
        let mut source = XoshiroSource::new();
        assert_eq!(source.next_index(0), 0);
    }

    #[test]
    fn test_xoshiro_seeded() {
        let mut source1 = XoshiroSource::with_seed(12345);
        let mut source2 = XoshiroSource::with_seed(12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(source1.next_index(1000), source2.next_index(1000));
        }
    }

    #[test]
    fn test_xoshiro_optional_seed() {
        let mut seeded = XoshiroSource::from_optional_seed(Some(8));
        let mut reference = XoshiroSource::with_seed(8);
        assert_eq!(seeded.next_index(500), reference.next_index(500));
    }

    #[test]
    fn test_xoshiro_coverage() {
        let mut source = XoshiroSource::with_seed(42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            buckets[source.next_index(10)] += 1;
        }

        // Each bucket should have roughly 1000 samples (10000 / 10)
        // Allow 20% deviation for randomness
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }
}
