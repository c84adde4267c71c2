// src/brownian.rs
//! Shared Brownian Motion Draws
//!
//! # Mathematical Framework
//!
//! Every scheme discretizes the same driving noise:
//! ```text
//! dB_k ~ N(0, dt)            increments, one per path per step
//! B_0  = 0
//! B_k  = B_{k-1} + dB_{k-1}  cumulative Brownian path
//! ```
//!
//! The generator draws the full (num_paths x num_steps) increment matrix
//! once, then accumulates it into the (num_paths x num_steps+1) path
//! matrix with a leading zero column. Both matrices are consumed
//! read-only afterwards, so two schemes bound to the same draw are
//! directly comparable (common random numbers).

use crate::error::{validation::*, SdeResult};
use crate::rng;
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::Rng;

/// One shared Brownian draw: the increment matrix and its running sum.
#[derive(Debug, Clone)]
pub struct BrownianPaths {
    increments: Array2<f64>,
    path: Array2<f64>,
}

impl BrownianPaths {
    /// Draw a fresh increment matrix from `rng` and accumulate the path.
    ///
    /// Each increment is an independent sample from Normal(0, step_size).
    /// The path satisfies `path[:, 0] == 0` and
    /// `path[:, k] - path[:, k-1] == increments[:, k-1]` exactly.
    pub fn sample<R: Rng + ?Sized>(
        num_paths: usize,
        num_steps: usize,
        step_size: f64,
        rng: &mut R,
    ) -> SdeResult<Self> {
        validate_paths(num_paths)?;
        validate_steps(num_steps)?;
        validate_positive("step_size", step_size)?;

        let sqrt_dt = step_size.sqrt();
        let mut increments = Array2::<f64>::zeros((num_paths, num_steps));
        for value in increments.iter_mut() {
            *value = sqrt_dt * rng::get_normal_draw(rng);
        }

        // Cumulative sum along the step axis, leading zero column.
        let mut path = Array2::<f64>::zeros((num_paths, num_steps + 1));
        for k in 0..num_steps {
            let next = &path.column(k) + &increments.column(k);
            path.column_mut(k + 1).assign(&next);
        }

        Ok(BrownianPaths { increments, path })
    }

    /// The (num_paths x num_steps) matrix of Normal(0, dt) increments.
    pub fn increments(&self) -> ArrayView2<'_, f64> {
        self.increments.view()
    }

    /// The (num_paths x num_steps+1) cumulative Brownian path.
    pub fn path(&self) -> ArrayView2<'_, f64> {
        self.path.view()
    }

    /// The increment column consumed by step `step`, one entry per path.
    pub fn increment(&self, step: usize) -> ArrayView1<'_, f64> {
        self.increments.column(step)
    }

    pub fn num_paths(&self) -> usize {
        self.increments.nrows()
    }

    pub fn num_steps(&self) -> usize {
        self.increments.ncols()
    }
}
