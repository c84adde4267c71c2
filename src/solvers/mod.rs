// src/solvers/mod.rs
//! Discretization Engine
//!
//! The [`Solver`] owns the time grid, the batch state matrix, and one
//! shared Brownian draw; a [`Scheme`] supplies the per-step update
//! formula. The solver walks the grid column by column:
//!
//! ```text
//! Initialized (cursor = 0) -> Advancing (0 < cursor < num_steps) -> Complete
//! ```
//!
//! `iterate()` is the only mutator and is illegal once the solver is
//! `Complete`. `solve()` rewinds to the initialized state and runs
//! `iterate()` to completion. `reset()` additionally redraws all
//! randomness.
//!
//! Because the Brownian matrices are drawn once at construction, two
//! solvers built from the same seed and configuration see bit-identical
//! increments, so different schemes can be compared on a common draw.
//!
//! A `Solver` is not re-entrant: calling `iterate()` from multiple
//! threads on one instance is unsupported. Use one solver per thread or
//! synchronize externally.

pub mod euler_maruyama;
pub mod milstein;

pub use euler_maruyama::EulerMaruyama;
pub use milstein::Milstein;

use crate::brownian::BrownianPaths;
use crate::error::{SdeError, SdeResult};
use crate::problem::Sivp;
use crate::rng;
use crate::solution::PathSolution;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rand::rngs::StdRng;

/// A per-step update rule. Implementations are stateless strategy
/// objects; all state lives in the [`Solver`].
pub trait Scheme {
    /// Human-readable scheme name, used in error reporting.
    fn name(&self) -> &'static str;

    /// Compute the next state column from the current one.
    ///
    /// `x` holds the current per-path states, `dw` the Brownian
    /// increments consumed by this step, `dt` the fixed step size.
    fn step(
        &self,
        problem: &Sivp,
        t: f64,
        x: ArrayView1<'_, f64>,
        dw: ArrayView1<'_, f64>,
        dt: f64,
    ) -> SdeResult<Array1<f64>>;
}

/// Verify that a coefficient function returned one value per path.
pub(crate) fn check_shape(
    coefficient: &'static str,
    expected: usize,
    values: Array1<f64>,
) -> SdeResult<Array1<f64>> {
    if values.len() != expected {
        Err(SdeError::ShapeMismatch {
            coefficient,
            expected,
            actual: values.len(),
        })
    } else {
        Ok(values)
    }
}

/// Where the solver's cursor sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Initialized,
    Advancing,
    Complete,
}

/// Solver configuration: batch width, grid resolution, and the seed for
/// the Brownian draw. The step size is always derived as
/// `(t_end - t_start) / num_steps`.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    pub num_paths: usize,
    pub num_steps: usize,
    pub seed: u64,
}

impl SolverConfig {
    /// Validate the solver configuration
    pub fn validate(&self) -> SdeResult<()> {
        crate::error::validation::validate_paths(self.num_paths)?;
        crate::error::validation::validate_steps(self.num_steps)?;
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            num_paths: 100,
            num_steps: 100,
            seed: 12345,
        }
    }
}

/// The shared state machine driving a batch of sample paths through a
/// fixed time grid.
pub struct Solver<S: Scheme> {
    scheme: S,
    problem: Sivp,
    num_paths: usize,
    num_steps: usize,
    step_size: f64,
    times: Array1<f64>,
    states: Array2<f64>,
    brownian: BrownianPaths,
    cursor: usize,
    rng: StdRng,
}

impl<S: Scheme> Solver<S> {
    /// Bind a scheme to a problem and draw the Brownian matrices.
    ///
    /// Column 0 of the state matrix is filled with the problem's initial
    /// condition; the cursor starts at 0 (`Initialized`).
    pub fn new(scheme: S, problem: Sivp, config: SolverConfig) -> SdeResult<Self> {
        config.validate()?;

        let num_paths = config.num_paths;
        let num_steps = config.num_steps;
        let step_size = (problem.t_end() - problem.t_start()) / num_steps as f64;
        let times = Array1::linspace(problem.t_start(), problem.t_end(), num_steps + 1);

        let mut rng = rng::seed_rng_from_u64(config.seed);
        let brownian = BrownianPaths::sample(num_paths, num_steps, step_size, &mut rng)?;

        let mut states = Array2::<f64>::zeros((num_paths, num_steps + 1));
        states.column_mut(0).fill(problem.initial_condition());

        Ok(Solver {
            scheme,
            problem,
            num_paths,
            num_steps,
            step_size,
            times,
            states,
            brownian,
            cursor: 0,
            rng,
        })
    }

    /// Advance the state matrix by one column.
    ///
    /// Reads column `cursor`, asks the scheme for column `cursor + 1`,
    /// writes it, and increments the cursor. Fails with `OutOfSteps`
    /// once the solver is `Complete`.
    pub fn iterate(&mut self) -> SdeResult<()> {
        if self.cursor >= self.num_steps {
            return Err(SdeError::OutOfSteps {
                num_steps: self.num_steps,
            });
        }

        let t = self.times[self.cursor];
        let x = self.states.column(self.cursor);
        let dw = self.brownian.increment(self.cursor);
        let next = self.scheme.step(&self.problem, t, x, dw, self.step_size)?;

        self.states.column_mut(self.cursor + 1).assign(&next);
        self.cursor += 1;
        Ok(())
    }

    /// Run from `Initialized` to `Complete` and return the full path
    /// history as an immutable snapshot.
    ///
    /// Rewinds the cursor first, so repeated calls re-integrate the same
    /// Brownian draw and return identical solutions.
    pub fn solve(&mut self) -> SdeResult<PathSolution> {
        self.rewind();
        while self.cursor < self.num_steps {
            self.iterate()?;
        }
        Ok(PathSolution::new(self.times.clone(), self.states.clone()))
    }

    /// Full state reset: redraw all randomness and return to
    /// `Initialized`. Subsequent draws come from the solver's ongoing
    /// RNG stream, so a reset solver remains reproducible per seed.
    pub fn reset(&mut self) -> SdeResult<()> {
        self.brownian =
            BrownianPaths::sample(self.num_paths, self.num_steps, self.step_size, &mut self.rng)?;
        self.states.fill(0.0);
        self.states
            .column_mut(0)
            .fill(self.problem.initial_condition());
        self.cursor = 0;
        Ok(())
    }

    fn rewind(&mut self) {
        self.states
            .column_mut(0)
            .fill(self.problem.initial_condition());
        self.cursor = 0;
    }

    /// Lifecycle position derived from the cursor.
    pub fn state(&self) -> SolverState {
        if self.cursor == 0 {
            SolverState::Initialized
        } else if self.cursor < self.num_steps {
            SolverState::Advancing
        } else {
            SolverState::Complete
        }
    }

    pub fn current_step(&self) -> usize {
        self.cursor
    }

    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn problem(&self) -> &Sivp {
        &self.problem
    }

    /// The time grid, length `num_steps + 1`.
    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    /// The state matrix. Columns past the cursor are not yet determined.
    pub fn states(&self) -> ArrayView2<'_, f64> {
        self.states.view()
    }

    /// The Brownian draw shared by every step of this solver.
    pub fn brownian(&self) -> &BrownianPaths {
        &self.brownian
    }
}
