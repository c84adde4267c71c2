// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! # Design Philosophy
//!
//! Simulating many sample paths requires random numbers with specific
//! properties:
//! 1. **Reproducibility**: Same seed -> same results (critical for
//!    debugging/validation and for comparing schemes on a common draw)
//! 2. **Batch sampling**: Whole increment matrices drawn in one pass
//! 3. **Statistical quality**: Good distributional properties
//!
//! The solver seeds one `StdRng` per instance and draws its entire
//! Brownian increment matrix up front, so every scheme bound to that
//! solver consumes exactly the same randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Build a seeded standard RNG. Equal seeds give bit-identical streams.
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a single standard-normal variate.
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}
