//! Random input generation.
//!
//! The random source is injected so benchmark inputs and tests can be
//! reproduced from a seed.

use crate::error::SortError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces arrays of integers drawn uniformly from an inclusive range.
#[derive(Debug, Clone)]
pub struct RandomArrayGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomArrayGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate `n` values, each independently uniform in `[low, high]`.
    ///
    /// Any `i32` bounds are accepted as long as `low <= high`; the full
    /// `i32::MIN..=i32::MAX` range does not overflow.
    pub fn generate(&mut self, n: usize, low: i32, high: i32) -> Result<Vec<i32>, SortError> {
        if low > high {
            return Err(SortError::InvalidRange { low, high });
        }
        tracing::trace!(n, low, high, "generating random array");
        Ok((0..n).map(|_| self.rng.gen_range(low..=high)).collect())
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomArrayGenerator<StdRng> {
    /// Deterministic generator: the same seed always yields the same arrays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

/// Generate `n` values in `[low, high]` from the thread-local random source.
pub fn random_array(n: usize, low: i32, high: i32) -> Result<Vec<i32>, SortError> {
    RandomArrayGenerator::new(rand::thread_rng()).generate(n, low, high)
}
