//! Circuit representation.
//!
//! This module provides the [`Circuit`] store that the solver reads from:
//! an ordered, append-only list of components and a node count that grows
//! with the highest node index referenced, up to [`MAX_NODES`]. Node 0 is
//! reserved for ground.

mod graph;
mod types;
mod validate;

pub use graph::Circuit;
pub use types::*;
pub use validate::{validate_node, validate_value};
