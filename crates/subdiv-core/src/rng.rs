//! Seeded random source owned by a single generation.
//!
//! Seeding: `StdRng::seed_from_u64(seed ^ SEED_SALT)`. Every value handed out
//! consumes exactly one `f64` from `Rng::gen`, so the draw sequence depends
//! only on the seed and on how many values were requested.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
    draws: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed ^ SEED_SALT), draws: 0 }
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen::<f64>()
    }

    /// Displacement uniform in `[-amplitude, +amplitude)`.
    /// Consumes one draw even when `amplitude` is zero.
    pub fn offset(&mut self, amplitude: f32) -> f32 {
        ((self.unit() * 2.0 - 1.0) * amplitude as f64) as f32
    }

    /// Value uniform in `[low, high)`.
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        (low as f64 + self.unit() * (high as f64 - low as f64)) as f32
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
