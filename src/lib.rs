//! # ito-paths: Batched Numerical Solvers for Ito SDEs
//!
//! A Rust library for simulating many independent sample paths of a
//! stochastic differential equation
//!
//! ```text
//! dX_t = mu(t, X_t) dt + sigma(t, X_t) dB_t
//! ```
//!
//! over a fixed time horizon, with pluggable discretization schemes.
//!
//! ## Key Features
//!
//! - **Shared Brownian draws**: one increment matrix per solver, so
//!   different schemes run against the same seed are directly comparable
//! - **Batched state**: all paths advance together through a common time
//!   grid, stored in a preallocated `ndarray` matrix
//! - **Multiple schemes**: Euler-Maruyama and Milstein, behind a single
//!   `Scheme` trait
//! - **Deterministic**: equal seeds give bit-identical increments
//! - **Robust validation**: configuration and coefficient-shape errors
//!   surface as typed `SdeError`s at the point of violation
//!
//! ## Quick Start
//!
//! ```rust
//! use ito_paths::models::Gbm;
//! use ito_paths::solvers::{EulerMaruyama, Solver, SolverConfig};
//!
//! // dS_t = 0.05 S_t dt + 0.2 S_t dB_t, S_0 = 100, on [0, 1]
//! let problem = Gbm::new(100.0, 0.05, 0.2).sivp(0.0, 1.0).expect("valid horizon");
//!
//! let config = SolverConfig {
//!     num_paths: 8,
//!     num_steps: 50,
//!     seed: 42,
//! };
//!
//! let mut solver = Solver::new(EulerMaruyama::new(), problem, config)
//!     .expect("valid configuration");
//! let solution = solver.solve().expect("runs to completion");
//!
//! assert_eq!(solution.states().dim(), (8, 51));
//! assert_eq!(solution.times().len(), 51);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The solver discretizes the SDE on a uniform grid of `num_steps`
//! intervals, drawing all Brownian increments up front and delegating the
//! per-step update formula to the chosen scheme. Euler-Maruyama converges
//! with strong order 0.5; Milstein adds the Ito correction term
//! `0.5 sigma sigma' [(dB)^2 - dt]` for strong order 1.0 when the
//! volatility's spatial derivative is available.

// Module declarations
pub mod error;
pub mod rng;
pub mod brownian;
pub mod problem;
pub mod models;
pub mod solvers;
pub mod solution;
pub mod output;

// Re-export commonly used types for convenience
pub use brownian::BrownianPaths;
pub use error::{SdeError, SdeResult};
pub use problem::Sivp;
pub use solution::PathSolution;
pub use solvers::{EulerMaruyama, Milstein, Scheme, Solver, SolverConfig, SolverState};
