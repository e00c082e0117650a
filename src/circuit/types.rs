//! Core types for circuit representation.

use std::fmt;

use crate::error::{NodalError, Result};

/// Upper bound on the node count of a circuit, ground included.
///
/// The nodal system is dense, so this also caps its matrix at 128 MiB.
pub const MAX_NODES: usize = 4096;

/// A node index in the circuit.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }

    /// Raw index into a node voltage vector.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for NodeId {
    type Error = NodalError;

    fn try_from(value: i64) -> Result<Self> {
        usize::try_from(value)
            .map(NodeId)
            .map_err(|_| NodalError::invalid_input(format!("node index {value} is negative")))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// A unique identifier for a component in the circuit.
/// Ids are handed out by [`Circuit`](super::Circuit) starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
