// src/solution.rs
//! Simulated Path History
//!
//! A [`PathSolution`] is the immutable snapshot returned by
//! `Solver::solve`: the time grid and the full state matrix, ready to be
//! handed to external plotting or statistics code.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

/// The time grid and the (num_paths x num_steps+1) state matrix of a
/// completed simulation.
#[derive(Debug, Clone)]
pub struct PathSolution {
    times: Array1<f64>,
    states: Array2<f64>,
}

impl PathSolution {
    pub(crate) fn new(times: Array1<f64>, states: Array2<f64>) -> Self {
        PathSolution { times, states }
    }

    /// The time grid, length `num_steps + 1`.
    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    /// The full state matrix, one row per path.
    pub fn states(&self) -> ArrayView2<'_, f64> {
        self.states.view()
    }

    pub fn num_paths(&self) -> usize {
        self.states.nrows()
    }

    pub fn num_steps(&self) -> usize {
        self.states.ncols() - 1
    }

    /// One sample path's trajectory over the grid.
    pub fn path(&self, index: usize) -> ArrayView1<'_, f64> {
        self.states.row(index)
    }

    /// The terminal value of every path (the last grid column).
    pub fn terminal_values(&self) -> ArrayView1<'_, f64> {
        self.states.column(self.states.ncols() - 1)
    }

    /// The cross-path mean at each grid time.
    pub fn mean_path(&self) -> Array1<f64> {
        // num_paths > 0 is enforced at solver construction
        self.states.mean_axis(Axis(0)).unwrap()
    }
}
