//! Random initial state for newly exposed cells.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of alive/dead values for cells the grid creates.
pub trait FillSource {
    fn next_alive(&mut self) -> bool;
}

/// 50/50 pseudo-random fill backed by a seedable ChaCha stream.
#[derive(Debug, Clone)]
pub struct RandomFill {
    rng: ChaCha8Rng,
}

impl RandomFill {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, otherwise drawn from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::from_seed(s),
            None => Self::from_entropy(),
        }
    }
}

impl FillSource for RandomFill {
    fn next_alive(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Fills every new cell with the same value. Handy for deterministic layouts.
#[derive(Debug, Clone, Copy)]
pub struct ConstantFill(pub bool);

impl FillSource for ConstantFill {
    fn next_alive(&mut self) -> bool {
        self.0
    }
}
