//! Random number generation for pixel sampling.
//!
//! The jitter stream is a seedable ChaCha20 generator owned by the caller
//! and passed down explicitly, so a render is reproducible for a fixed seed
//! and no hidden process-wide state is involved.

use glam::Vec3A;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generator feeding the per-sample jitter.
pub type SampleRng = ChaCha20Rng;

/// Create a jitter generator from a seed.
pub fn seeded(seed: u64) -> SampleRng {
    SampleRng::seed_from_u64(seed)
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32(rng: &mut SampleRng) -> f32 {
    rng.random()
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(rng: &mut SampleRng, min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32(rng)
}

/// Random sub-pixel jitter with x/y components in [-1.0, 1.0).
pub fn jitter(rng: &mut SampleRng) -> Vec3A {
    Vec3A::new(
        random_f32_range(rng, -1.0, 1.0),
        random_f32_range(rng, -1.0, 1.0),
        0.0,
    )
}
