// src/models/gbm.rs
use crate::error::SdeResult;
use crate::problem::Sivp;
use ndarray::{Array1, ArrayView1};

/// Geometric Brownian motion, `dS_t = mu S_t dt + sigma S_t dB_t`.
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    pub s0: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64) -> Self {
        Gbm { s0, mu, sigma }
    }

    /// Build the initial value problem on `[t_start, t_end]`, with the
    /// volatility derivative attached (d(sigma x)/dx = sigma).
    pub fn sivp(&self, t_start: f64, t_end: f64) -> SdeResult<Sivp> {
        let mu = self.mu;
        let sigma = self.sigma;
        Ok(Sivp::new(
            self.s0,
            t_start,
            t_end,
            move |_t, x: ArrayView1<'_, f64>| x.mapv(|s| mu * s),
            move |_t, x: ArrayView1<'_, f64>| x.mapv(|s| sigma * s),
        )?
        .with_volatility_derivative(move |_t, x: ArrayView1<'_, f64>| {
            Array1::from_elem(x.len(), sigma)
        }))
    }

    /// Exact solution at time `t` given the Brownian value `b_t`:
    /// `S_t = S_0 exp((mu - sigma^2/2) t + sigma B_t)`.
    pub fn exact_value(&self, t: f64, b_t: f64) -> f64 {
        self.s0 * ((self.mu - 0.5 * self.sigma * self.sigma) * t + self.sigma * b_t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_coefficients() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        let problem = gbm.sivp(0.0, 1.0).unwrap();
        let x = array![100.0, 50.0];

        assert_eq!(problem.drift(0.0, x.view()), array![5.0, 2.5]);
        assert_eq!(problem.volatility(0.0, x.view()), array![20.0, 10.0]);
        assert_eq!(
            problem.volatility_derivative(0.0, x.view()).unwrap(),
            array![0.2, 0.2]
        );
        assert_eq!(problem.initial_condition(), 100.0);
    }

    #[test]
    fn test_exact_value_at_origin() {
        let gbm = Gbm::new(100.0, 0.05, 0.2);
        assert_eq!(gbm.exact_value(0.0, 0.0), 100.0);
    }
}
