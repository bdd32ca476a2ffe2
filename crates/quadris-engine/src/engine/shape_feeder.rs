use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::ShapeKind;

/// Supplies the stream of random shapes.
///
/// Draws are independent and uniform over the 7-shape catalog; repeats are
/// possible and expected. There is no bag or anti-repeat rule.
#[derive(Debug, Clone)]
pub struct ShapeFeeder {
    rng: Pcg32,
}

impl Default for ShapeFeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeFeeder {
    /// Creates a feeder seeded from the OS random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a fixed seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draws the next shape kind.
    pub fn next_kind(&mut self) -> ShapeKind {
        self.rng.random()
    }
}
