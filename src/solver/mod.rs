//! DC nodal solver and analytic RC step response.
//!
//! ## Nodal Analysis
//!
//! Kirchhoff's current law at every node gives a linear system `G·v = I`:
//! - v contains the node voltages
//! - G is the conductance matrix built from resistor stamps
//! - I holds currents injected by nodes with a fixed voltage
//!
//! Ground and every node pinned by a grounded voltage source are known in
//! advance, so they are eliminated before solving. Only the remaining
//! nodes make up the reduced system:
//!
//! ```text
//! [ G_uu ] [ v_u ] = [ I_u ]      with  I_u = -G_uk · v_k
//! ```
//!
//! where `u` indexes unknown nodes and `k` fixed ones. The reduced system is
//! solved by Gaussian elimination with partial pivoting on a dense matrix.
//!
//! Floating voltage sources (no terminal at ground) would need extra branch
//! current unknowns and are reported as unsupported.

mod linear;
mod nodal;
mod transient;

pub use linear::{solve_in_place, DenseMatrix};
pub use nodal::{solve, solve_with, NodeVoltages};
pub use transient::{rc_step_response, StepResponse};

/// Smallest pivot magnitude accepted during elimination.
pub const PIVOT_TOLERANCE: f64 = 1e-14;

/// Upper bound on the number of samples in a step response.
pub const MAX_STEP_SAMPLES: usize = 10_000_000;

/// Configuration for the DC solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Pivots with a smaller magnitude mark the system as singular.
    pub pivot_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: PIVOT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the singular-pivot threshold.
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }
}
