//! Deterministic random number generation for the simulation.
//!
//! All gameplay randomness (brick placement, powerup spawns) flows through
//! [`GameRng`], so a round can be reproduced from a seed in tests while the
//! server seeds from OS entropy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG owned by the game state.
///
/// Uses ChaCha8: fast, and the same seed always produces the same sequence.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a new RNG seeded from OS entropy.
    pub fn from_os_rng() -> Self {
        Self {
            inner: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Return true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.inner.random_bool(p)
    }

    /// Uniform value in `[0, 1)`, used for weighted picks.
    pub fn roll(&mut self) -> f64 {
        self.inner.random()
    }
}
