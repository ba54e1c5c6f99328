//! Seeded randomness for the spawner.
//!
//! Systems draw from `ResMut<SimRng>` rather than a thread RNG, so a given
//! seed always grows the same network.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DEFAULT_SEED: u64 = 42;

/// `ChaCha8Rng` is portable, so the same seed yields the same stations on
/// every platform.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}
