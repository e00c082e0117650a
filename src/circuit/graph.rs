//! Circuit component store.

use log::debug;

use super::types::{ComponentId, NodeId, MAX_NODES};
use super::validate::{validate_node, validate_value};
use crate::components::{Component, ComponentKind};
use crate::error::{NodalError, Result};

/// A flat circuit: an append-only list of components plus a node count.
///
/// `node_count` is one more than the highest node index seen so far and
/// never shrinks. A fresh circuit has a single node, ground.
#[derive(Debug, Clone)]
pub struct Circuit {
    components: Vec<Component>,
    node_count: usize,
}

impl Circuit {
    /// Create an empty circuit containing only the ground node.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            node_count: 1,
        }
    }

    /// Add a component between `node_pos` and `node_neg`.
    ///
    /// Returns the id assigned to the new component. Ids start at 1 and
    /// increase by one for every successful call. A rejected value or a
    /// node index at or above [`MAX_NODES`] leaves the circuit untouched.
    pub fn add_component(
        &mut self,
        kind: ComponentKind,
        value: f64,
        node_pos: NodeId,
        node_neg: NodeId,
    ) -> Result<ComponentId> {
        validate_value(kind, value)?;
        validate_node(node_pos)?;
        validate_node(node_neg)?;
        let required = node_pos
            .max(node_neg)
            .index()
            .checked_add(1)
            .ok_or_else(|| NodalError::invalid_input("node index overflows"))?;

        let id = ComponentId(self.components.last().map_or(1, |c| c.id.0 + 1));
        self.components.push(Component {
            id,
            kind,
            value,
            nodes: [node_pos, node_neg],
        });
        self.node_count = self.node_count.max(required);

        debug!(
            "added {kind} {id} = {value} {} between {node_pos} and {node_neg}",
            kind.unit()
        );
        Ok(id)
    }

    /// Raise the node count to at least `count`.
    ///
    /// Counts above [`MAX_NODES`] are rejected and leave the circuit as is.
    pub fn reserve_nodes(&mut self, count: usize) -> Result<()> {
        if count > MAX_NODES {
            return Err(NodalError::invalid_input(format!(
                "node count {count} exceeds the limit of {MAX_NODES}"
            )));
        }
        self.node_count = self.node_count.max(count);
        Ok(())
    }

    /// All components in insertion order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of nodes, including ground.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Find a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}
