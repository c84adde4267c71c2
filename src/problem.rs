// src/problem.rs
//! Stochastic Initial Value Problems
//!
//! An [`Sivp`] describes the SDE
//! ```text
//! dX_t = mu(t, X_t) dt + sigma(t, X_t) dB_t,    X_{t_start} = x_0
//! ```
//! as a value object: the initial condition, the time horizon, and the
//! coefficient functions. Coefficients are stored as boxed closures and
//! must be pure and vectorized over the path dimension: given one time
//! and a vector of per-path states they return a vector of equal length.
//!
//! The volatility derivative `d sigma / dx` is optional; it is only
//! consumed by schemes that need it (Milstein).

use crate::error::{validation::*, SdeResult};
use ndarray::{Array1, ArrayView1};

/// A vectorized SDE coefficient: maps `(t, x_batch)` to a batch of values.
pub type Coefficient = Box<dyn Fn(f64, ArrayView1<'_, f64>) -> Array1<f64> + Send + Sync>;

/// A stochastic initial value problem on a fixed horizon.
pub struct Sivp {
    initial_condition: f64,
    t_start: f64,
    t_end: f64,
    drift: Coefficient,
    volatility: Coefficient,
    volatility_derivative: Option<Coefficient>,
}

impl Sivp {
    /// Build a problem from its horizon, initial condition, and the drift
    /// and volatility functions.
    ///
    /// Fails with `InvalidConfiguration` when `t_end <= t_start` or the
    /// initial condition is not finite.
    pub fn new<D, V>(
        initial_condition: f64,
        t_start: f64,
        t_end: f64,
        drift: D,
        volatility: V,
    ) -> SdeResult<Self>
    where
        D: Fn(f64, ArrayView1<'_, f64>) -> Array1<f64> + Send + Sync + 'static,
        V: Fn(f64, ArrayView1<'_, f64>) -> Array1<f64> + Send + Sync + 'static,
    {
        validate_finite("initial_condition", initial_condition)?;
        validate_horizon(t_start, t_end)?;

        Ok(Sivp {
            initial_condition,
            t_start,
            t_end,
            drift: Box::new(drift),
            volatility: Box::new(volatility),
            volatility_derivative: None,
        })
    }

    /// Attach the spatial derivative of the volatility, enabling schemes
    /// that require it.
    pub fn with_volatility_derivative<G>(mut self, derivative: G) -> Self
    where
        G: Fn(f64, ArrayView1<'_, f64>) -> Array1<f64> + Send + Sync + 'static,
    {
        self.volatility_derivative = Some(Box::new(derivative));
        self
    }

    pub fn initial_condition(&self) -> f64 {
        self.initial_condition
    }

    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Evaluate the drift over a batch of per-path states.
    pub fn drift(&self, t: f64, x: ArrayView1<'_, f64>) -> Array1<f64> {
        (self.drift)(t, x)
    }

    /// Evaluate the volatility over a batch of per-path states.
    pub fn volatility(&self, t: f64, x: ArrayView1<'_, f64>) -> Array1<f64> {
        (self.volatility)(t, x)
    }

    /// Evaluate the volatility derivative, if the problem defines one.
    pub fn volatility_derivative(&self, t: f64, x: ArrayView1<'_, f64>) -> Option<Array1<f64>> {
        self.volatility_derivative.as_ref().map(|f| f(t, x))
    }

    pub fn has_volatility_derivative(&self) -> bool {
        self.volatility_derivative.is_some()
    }
}

impl std::fmt::Debug for Sivp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sivp")
            .field("initial_condition", &self.initial_condition)
            .field("t_start", &self.t_start)
            .field("t_end", &self.t_end)
            .field("has_volatility_derivative", &self.has_volatility_derivative())
            .finish()
    }
}
