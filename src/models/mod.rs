// src/models/mod.rs
//! Preset problem definitions for common one-dimensional processes.
//!
//! Each model knows its coefficient algebra and builds a ready-to-solve
//! [`Sivp`](crate::problem::Sivp) for a given horizon, including the
//! volatility derivative where one exists.

pub mod gbm;
pub mod ou_process;

pub use gbm::Gbm;
pub use ou_process::OuProcess;
