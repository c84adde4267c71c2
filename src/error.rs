// src/error.rs
use std::fmt;

/// Custom error types for the ito-paths library
#[derive(Debug, Clone, PartialEq)]
pub enum SdeError {
    /// Invalid solver or problem configuration
    InvalidConfiguration { field: String, reason: String },

    /// Scheme requires the volatility's spatial derivative but the
    /// problem does not provide one
    MissingDerivative { scheme: &'static str },

    /// `iterate()` called after the solver reached the end of the grid
    OutOfSteps { num_steps: usize },

    /// A coefficient function returned a vector of the wrong length
    ShapeMismatch {
        coefficient: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for SdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdeError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            SdeError::MissingDerivative { scheme } => {
                write!(
                    f,
                    "The {} scheme requires a volatility derivative, but the problem does not define one",
                    scheme
                )
            }
            SdeError::OutOfSteps { num_steps } => {
                write!(
                    f,
                    "Solver already completed all {} steps; call reset() before iterating again",
                    num_steps
                )
            }
            SdeError::ShapeMismatch {
                coefficient,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "The {} function returned {} values for {} paths",
                    coefficient, actual, expected
                )
            }
        }
    }
}

impl std::error::Error for SdeError {}

/// Result type alias for ito-paths operations
pub type SdeResult<T> = Result<T, SdeError>;

/// Validation utilities
pub mod validation {
    use super::{SdeError, SdeResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SdeResult<()> {
        if value <= 0.0 {
            Err(SdeError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("must be positive (> 0), got {}", value),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SdeResult<()> {
        if !value.is_finite() {
            Err(SdeError::InvalidConfiguration {
                field: name.to_string(),
                reason: format!("must be finite (not NaN or infinite), got {}", value),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(num_paths: usize) -> SdeResult<()> {
        if num_paths == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "num_paths".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(num_steps: usize) -> SdeResult<()> {
        if num_steps == 0 {
            Err(SdeError::InvalidConfiguration {
                field: "num_steps".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a time horizon is well-ordered
    pub fn validate_horizon(t_start: f64, t_end: f64) -> SdeResult<()> {
        validate_finite("t_start", t_start)?;
        validate_finite("t_end", t_end)?;
        if t_end <= t_start {
            Err(SdeError::InvalidConfiguration {
                field: "t_end".to_string(),
                reason: format!("must be greater than t_start ({} <= {})", t_end, t_start),
            })
        } else {
            Ok(())
        }
    }
}
