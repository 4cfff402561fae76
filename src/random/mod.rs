//! Uniform random sources
//!
//! The block shuffle never reaches for a global generator. Every draw goes
//! through a [`RandomSource`] supplied by the caller, so tests can substitute
//! a seeded or fully scripted source and production code can use an
//! entropy-seeded one.
//!
//! # Sources
//!
//! - **Xoshiro**: xoshiro256++ PRNG, entropy or fixed seed (default)
//! - **Scripted**: replays a fixed list of draws (exact, hand-checkable tests)
//! - **RngSource**: adapter for any `rand::Rng`
//!
//! # Example
//!
//! ```
//! use blockrand::random::{RandomSource, xoshiro::XoshiroSource};
//!
//! let mut source = XoshiroSource::with_seed(7);
//! let index = source.next_index(6); // Uniform in [0, 6)
//! assert!(index < 6);
//! ```

use rand::Rng;

/// Source of uniformly distributed indices
///
/// Implementations must return every value in `[0, bound)` with equal
/// probability. The Fisher-Yates shuffle relies on this to make every block
/// ordering equally likely.
///
/// # Thread Safety
///
/// Sources must be `Send` so a caller can move one into a worker thread. A
/// source is never shared between concurrent generations; each call owns the
/// source it was handed.
pub trait RandomSource: Send {
    /// Draw an index in the range `[0, bound)`
    ///
    /// Returns 0 when `bound` is 0 or 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Adapter exposing any `rand::Rng` as a [`RandomSource`]
///
/// ```
/// use blockrand::random::{RandomSource, RngSource};
/// use rand::SeedableRng;
///
/// let mut source = RngSource::new(rand::rngs::StdRng::seed_from_u64(1));
/// assert!(source.next_index(10) < 10);
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}

pub mod scripted;
pub mod xoshiro;
