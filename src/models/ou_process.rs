// src/models/ou_process.rs
use crate::error::SdeResult;
use crate::problem::Sivp;
use ndarray::{Array1, ArrayView1};

/// Ornstein-Uhlenbeck process,
/// `dX_t = theta (mu - X_t) dt + sigma dB_t`.
#[derive(Debug, Clone, Copy)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// Build the initial value problem started from `x0`. The volatility
    /// is constant, so its derivative is identically zero.
    pub fn sivp(&self, x0: f64, t_start: f64, t_end: f64) -> SdeResult<Sivp> {
        let theta = self.theta;
        let mu = self.mu;
        let sigma = self.sigma;
        Ok(Sivp::new(
            x0,
            t_start,
            t_end,
            move |_t, x: ArrayView1<'_, f64>| x.mapv(|v| theta * (mu - v)),
            move |_t, x: ArrayView1<'_, f64>| Array1::from_elem(x.len(), sigma),
        )?
        .with_volatility_derivative(|_t, x: ArrayView1<'_, f64>| Array1::zeros(x.len())))
    }

    /// Exact mean of the process at time `t` started from `x0`.
    pub fn mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }
}
