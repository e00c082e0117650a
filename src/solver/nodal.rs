//! DC nodal assembly.
//!
//! Nodes tied to ground through a voltage source have a known potential and
//! are removed from the system. The remaining (unknown) nodes form a reduced
//! conductance system `G·v = I`, where resistors leading to a known node
//! move their contribution into the current vector `I`.

use std::ops::Index;

use crate::circuit::{Circuit, NodeId};
use crate::components::{Component, ComponentKind};
use crate::error::{NodalError, Result};

use super::linear::{solve_in_place, DenseMatrix};
use super::SolverConfig;

/// Node voltages from a DC solve, indexed by node.
///
/// Always `node_count` entries long; entry 0 is ground and is exactly 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVoltages {
    voltages: Vec<f64>,
}

impl NodeVoltages {
    /// Voltage at a node, or `None` if the node is outside the circuit.
    pub fn get(&self, node: NodeId) -> Option<f64> {
        self.voltages.get(node.index()).copied()
    }

    pub fn len(&self) -> usize {
        self.voltages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voltages.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.voltages
    }

    /// Iterate over `(node, voltage)` pairs, ground first.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.voltages
            .iter()
            .enumerate()
            .map(|(i, &v)| (NodeId(i), v))
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.voltages
    }
}

impl Index<usize> for NodeVoltages {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.voltages[index]
    }
}

impl Index<NodeId> for NodeVoltages {
    type Output = f64;

    fn index(&self, node: NodeId) -> &f64 {
        &self.voltages[node.index()]
    }
}

/// Classification of every node for one solve.
struct NodeMap {
    /// Fixed potential for nodes driven by a grounded source
    known: Vec<Option<f64>>,
    /// Row in the reduced system for each unknown node
    reduced: Vec<Option<usize>>,
    unknown_count: usize,
}

impl NodeMap {
    /// Scan voltage sources and number the remaining nodes.
    fn build(circuit: &Circuit) -> Result<Self> {
        let node_count = circuit.node_count();
        let mut known = vec![None; node_count];

        for source in circuit
            .components()
            .iter()
            .filter(|c| c.kind == ComponentKind::VoltageSource)
        {
            match (source.node_pos().is_ground(), source.node_neg().is_ground()) {
                // A later source on the same node replaces the earlier one
                (false, true) => known[source.node_pos().index()] = Some(source.value),
                (true, false) => known[source.node_neg().index()] = Some(-source.value),
                (false, false) => return Err(floating_source(source)),
                (true, true) => {}
            }
        }

        let mut reduced = vec![None; node_count];
        let mut unknown_count = 0;
        for node in 1..node_count {
            if known[node].is_none() {
                reduced[node] = Some(unknown_count);
                unknown_count += 1;
            }
        }

        Ok(Self {
            known,
            reduced,
            unknown_count,
        })
    }

    /// Row of `node` in the reduced system; `None` for ground and fixed nodes.
    fn row(&self, node: NodeId) -> Option<usize> {
        self.reduced[node.index()]
    }

    /// Fixed potential of a non-ground node.
    fn fixed(&self, node: NodeId) -> Option<f64> {
        if node.is_ground() {
            None
        } else {
            self.known[node.index()]
        }
    }
}

fn floating_source(source: &Component) -> NodalError {
    NodalError::unsupported_topology(format!(
        "voltage source {} between {} and {} is not referenced to ground",
        source.id,
        source.node_pos(),
        source.node_neg()
    ))
}

/// Stamp every resistor into the reduced system.
/// Capacitors are open at DC and contribute nothing.
fn assemble(circuit: &Circuit, map: &NodeMap) -> (DenseMatrix, Vec<f64>) {
    let mut g_matrix = DenseMatrix::zeros(map.unknown_count);
    let mut currents = vec![0.0; map.unknown_count];

    for resistor in circuit
        .components()
        .iter()
        .filter(|c| c.kind == ComponentKind::Resistor)
    {
        let [a, b] = resistor.nodes;
        let g = resistor.conductance();
        let (row_a, row_b) = (map.row(a), map.row(b));

        g_matrix.stamp_conductance(row_a, row_b, g);

        // Current injected by the fixed end of the resistor
        if let (Some(i), Some(v)) = (row_a, map.fixed(b)) {
            currents[i] += g * v;
        }
        if let (Some(i), Some(v)) = (row_b, map.fixed(a)) {
            currents[i] += g * v;
        }
    }

    (g_matrix, currents)
}

/// Solve the DC operating point with the default configuration.
pub fn solve(circuit: &Circuit) -> Result<NodeVoltages> {
    solve_with(circuit, &SolverConfig::default())
}

/// Solve the DC operating point.
///
/// Returns one voltage per node. Fails with
/// [`NodalError::UnsupportedTopology`] if a voltage source has no grounded
/// terminal, and with [`NodalError::SingularSystem`] if some node's voltage
/// is not determined (for example a node reached only through capacitors).
pub fn solve_with(circuit: &Circuit, config: &SolverConfig) -> Result<NodeVoltages> {
    let node_count = circuit.node_count();
    if node_count <= 1 {
        return Ok(NodeVoltages {
            voltages: vec![0.0; node_count.max(1)],
        });
    }

    let map = NodeMap::build(circuit)?;

    let mut solution = Vec::new();
    if map.unknown_count > 0 {
        let (mut g_matrix, currents) = assemble(circuit, &map);
        solution = currents;
        solve_in_place(&mut g_matrix, &mut solution, config.pivot_tolerance)?;
    }

    let voltages = (0..node_count)
        .map(|node| {
            if node == 0 {
                0.0
            } else if let Some(v) = map.known[node] {
                v
            } else {
                map.reduced[node].map_or(0.0, |i| solution[i])
            }
        })
        .collect();

    Ok(NodeVoltages { voltages })
}
