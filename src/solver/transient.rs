//! Analytic RC step response.
//!
//! For a single resistor, capacitor and grounded voltage source sharing one
//! node, the capacitor voltage after the source is switched on is
//!
//! ```text
//! v(t) = V * (1 - exp(-t / (R*C)))
//! ```
//!
//! No matrix is involved; the circuit is only inspected to find the three
//! components.

use crate::circuit::{Circuit, NodeId};
use crate::components::{Component, ComponentKind};
use crate::error::{NodalError, Result};

use super::MAX_STEP_SAMPLES;

/// Sampled step response at one node.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResponse {
    /// Node shared by the resistor, capacitor and source
    pub node: NodeId,
    /// Time constant R*C in seconds
    pub tau: f64,
    /// Sample times, `k * dt`
    pub times: Vec<f64>,
    /// Node voltage at each sample time
    pub voltages: Vec<f64>,
}

impl StepResponse {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over `(time, voltage)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.voltages.iter().copied())
    }
}

/// Last component of each kind, in circuit order.
fn last_of(circuit: &Circuit, kind: ComponentKind) -> Result<&Component> {
    circuit
        .components()
        .iter()
        .rev()
        .find(|c| c.kind == kind)
        .ok_or(NodalError::MissingComponent { kind })
}

fn sample_count(dt: f64, tmax: f64) -> Result<usize> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(NodalError::invalid_input(format!(
            "time step must be positive and finite, got {dt}"
        )));
    }
    if !tmax.is_finite() || tmax < 0.0 {
        return Err(NodalError::invalid_input(format!(
            "end time must be non-negative and finite, got {tmax}"
        )));
    }

    let steps = (tmax / dt).ceil();
    if steps >= MAX_STEP_SAMPLES as f64 {
        return Err(NodalError::invalid_input(format!(
            "{tmax} s at {dt} s steps needs more than {MAX_STEP_SAMPLES} samples"
        )));
    }
    Ok(steps as usize + 1)
}

/// Compute the RC step response sampled every `dt` seconds up to `tmax`.
///
/// If the circuit holds several components of the same kind, the last one
/// of each kind is used. The resistor, capacitor and source must all
/// attach to the same non-ground node. The source voltage is negated when
/// its negative terminal is the shared node.
///
/// Produces `ceil(tmax / dt) + 1` samples, so `tmax == 0` gives the single
/// sample `(0.0, 0.0)`.
pub fn rc_step_response(circuit: &Circuit, dt: f64, tmax: f64) -> Result<StepResponse> {
    let count = sample_count(dt, tmax)?;

    let resistor = last_of(circuit, ComponentKind::Resistor)?;
    let capacitor = last_of(circuit, ComponentKind::Capacitor)?;
    let source = last_of(circuit, ComponentKind::VoltageSource)?;

    let node = resistor.grounded_node();
    if node.is_ground()
        || capacitor.grounded_node() != node
        || source.grounded_node() != node
    {
        return Err(NodalError::unsupported_topology(format!(
            "resistor {} ({}), capacitor {} ({}) and voltage source {} ({}) do not share a node",
            resistor.id,
            resistor.grounded_node(),
            capacitor.id,
            capacitor.grounded_node(),
            source.id,
            source.grounded_node(),
        )));
    }

    let v_eff = if source.node_pos() == node {
        source.value
    } else {
        -source.value
    };
    let tau = resistor.value * capacitor.value;

    let times: Vec<f64> = (0..count).map(|k| k as f64 * dt).collect();
    let voltages = times
        .iter()
        .map(|&t| v_eff * (1.0 - (-t / tau).exp()))
        .collect();

    Ok(StepResponse {
        node,
        tau,
        times,
        voltages,
    })
}
