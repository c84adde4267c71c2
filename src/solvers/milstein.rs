// src/solvers/milstein.rs
//! Milstein Scheme for Higher-Order SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = mu(t, X_t) dt + sigma(t, X_t) dB_t
//! ```
//!
//! The Milstein scheme includes an additional correction term:
//! ```text
//! X_{n+1} = X_n + mu dt + sigma dB_n + 0.5 sigma sigma' [(dB_n)^2 - dt]
//! ```
//!
//! Where:
//! - `sigma'(t, x) = d sigma / dx` is the volatility's spatial derivative
//! - `(dB_n)^2 - dt` is the Ito correction term
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 1.0 (vs 0.5 for Euler-Maruyama)
//! - **Weak convergence**: Order 1.0
//! - **Cost**: Requires the volatility derivative
//!
//! # When to Use
//!
//! - When higher path-wise accuracy is needed
//! - For state-dependent volatility with an easy derivative
//! - When the step size cannot be made very small

use super::{check_shape, Scheme};
use crate::error::{SdeError, SdeResult};
use crate::problem::Sivp;
use ndarray::{Array1, ArrayView1};

/// Milstein numerical scheme for SDE integration
#[derive(Debug, Clone, Copy, Default)]
pub struct Milstein;

impl Milstein {
    pub fn new() -> Self {
        Milstein {}
    }
}

impl Scheme for Milstein {
    fn name(&self) -> &'static str {
        "Milstein"
    }

    /// Single Milstein step with Ito correction over the whole path batch
    ///
    /// # Algorithm
    ///
    /// 1. Evaluate drift mu, volatility sigma, and derivative sigma'
    /// 2. Start from the Euler-Maruyama update
    /// 3. Add the correction 0.5 sigma sigma' [(dB_n)^2 - dt]
    ///
    /// Fails with `MissingDerivative` when the problem carries no
    /// volatility derivative.
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
        let dsigma_dx = problem
            .volatility_derivative(t, x)
            .ok_or(SdeError::MissingDerivative { scheme: self.name() })?;
        let dsigma_dx = check_shape("volatility_derivative", num_paths, dsigma_dx)?;

        let ito = dw.mapv(|w| w * w - dt);
        let correction = 0.5 * ((&sigma * &dsigma_dx) * ito);

        Ok(x.to_owned() + mu * dt + &sigma * &dw + correction)
    }
}
