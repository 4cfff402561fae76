//! Scripted random source
//!
//! Replays a fixed list of draws in order, wrapping around at the end. Each
//! draw is reduced modulo the requested bound, so any script is valid for any
//! block size. Intended for tests that need to predict the exact shuffle.

use crate::random::RandomSource;

/// Replays a fixed sequence of draws
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<usize>,
    /// Position of the next draw
    position: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, position: 0 }
    }

    /// A source that always draws the upper end of the range
    ///
    /// Every swap in the shuffle becomes a self-swap, so blocks keep their
    /// template order.
    pub fn identity() -> Self {
        Self::new(vec![usize::MAX])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if bound <= 1 || self.draws.is_empty() {
            return 0;
        }

        let draw = self.draws[self.position % self.draws.len()];
        self.position += 1;

        if draw == usize::MAX {
            return bound - 1;
        }
        draw % bound
    }
}
