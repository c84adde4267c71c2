// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = mu(t, X_t) dt + sigma(t, X_t) dB_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + mu(t_n, X_n) dt + sigma(t_n, X_n) dB_n
//! ```
//!
//! Where `dB_n ~ N(0, dt)` are the solver's shared Brownian increments.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (depends on drift/volatility)
//!
//! # Use Cases
//!
//! - General-purpose SDE solver
//! - No volatility derivative required
//! - Simple implementation, widely understood

use super::{check_shape, Scheme};
use crate::error::SdeResult;
use crate::problem::Sivp;
use ndarray::{Array1, ArrayView1};

/// Euler-Maruyama numerical scheme for SDE integration
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerMaruyama;

impl EulerMaruyama {
    pub fn new() -> Self {
        EulerMaruyama {}
    }
}

impl Scheme for EulerMaruyama {
    fn name(&self) -> &'static str {
        "Euler-Maruyama"
    }

    /// Single Euler-Maruyama step over the whole path batch
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate drift: mu(t_n, X_n) over all paths
    /// 2. Evaluate volatility: sigma(t_n, X_n) over all paths
    /// 3. Update: X_{n+1} = X_n + mu * dt + sigma * dB_n
    fn step(
        &self,
        problem: &Sivp,
        t: f64,
        x: ArrayView1<'_, f64>,
        dw: ArrayView1<'_, f64>,
        dt: f64,
    ) -> SdeResult<Array1<f64>> {
        let num_paths = x.len();
        let mu = check_shape("drift", num_paths, problem.drift(t, x))?;
        let sigma = check_shape("volatility", num_paths, problem.volatility(t, x))?;

        Ok(x.to_owned() + mu * dt + sigma * &dw)
    }
}
