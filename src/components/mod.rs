//! Component records.
//!
//! The analyser supports three two-terminal components:
//! - Resistor (ohms), stamped as a conductance
//! - Voltage source (volts), fixing a node's potential relative to ground
//! - Capacitor (farads), open circuit at DC and used by the RC step response
//!
//! Components are created through [`Circuit::add_component`](crate::Circuit::add_component)
//! and are immutable afterwards.

use std::fmt;

use crate::circuit::{ComponentId, NodeId};

/// The type of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Resistor,
    VoltageSource,
    Capacitor,
}

impl ComponentKind {
    /// Single-letter tag used in netlists.
    pub fn letter(&self) -> char {
        match self {
            ComponentKind::Resistor => 'R',
            ComponentKind::VoltageSource => 'V',
            ComponentKind::Capacitor => 'C',
        }
    }

    /// Parse a netlist letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(ComponentKind::Resistor),
            'V' => Some(ComponentKind::VoltageSource),
            'C' => Some(ComponentKind::Capacitor),
            _ => None,
        }
    }

    /// Unit symbol of the component value.
    pub fn unit(&self) -> &'static str {
        match self {
            ComponentKind::Resistor => "ohm",
            ComponentKind::VoltageSource => "V",
            ComponentKind::Capacitor => "F",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Resistor => "resistor",
            ComponentKind::VoltageSource => "voltage source",
            ComponentKind::Capacitor => "capacitor",
        };
        f.write_str(name)
    }
}

/// A circuit component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Resistance, voltage or capacitance depending on `kind`
    pub value: f64,
    pub nodes: [NodeId; 2], // [positive, negative]
}

impl Component {
    pub fn node_pos(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn node_neg(&self) -> NodeId {
        self.nodes[1]
    }

    /// Get the conductance (1/R). Only meaningful for resistors.
    pub fn conductance(&self) -> f64 {
        1.0 / self.value
    }

    /// The terminal that is not ground.
    ///
    /// Returns `node_neg` when `node_pos` is ground, `node_pos` otherwise
    /// (so a component with two non-ground terminals reports `node_pos`,
    /// and a fully grounded one reports ground).
    pub fn grounded_node(&self) -> NodeId {
        if self.node_pos().is_ground() {
            self.node_neg()
        } else {
            self.node_pos()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resistor(nodes: [NodeId; 2]) -> Component {
        Component {
            id: ComponentId(1),
            kind: ComponentKind::Resistor,
            value: 1000.0,
            nodes,
        }
    }

    #[test]
    fn test_resistor_conductance() {
        let r = resistor([NodeId(1), NodeId::GROUND]);
        assert!((r.conductance() - 0.001).abs() < 1e-10);
    }

    #[test]
    fn test_grounded_node() {
        assert_eq!(resistor([NodeId(2), NodeId::GROUND]).grounded_node(), NodeId(2));
        assert_eq!(resistor([NodeId::GROUND, NodeId(3)]).grounded_node(), NodeId(3));
        assert_eq!(resistor([NodeId(4), NodeId(5)]).grounded_node(), NodeId(4));
        assert_eq!(
            resistor([NodeId::GROUND, NodeId::GROUND]).grounded_node(),
            NodeId::GROUND
        );
    }

    #[test]
    fn test_letters() {
        for kind in [
            ComponentKind::Resistor,
            ComponentKind::VoltageSource,
            ComponentKind::Capacitor,
        ] {
            assert_eq!(ComponentKind::from_letter(kind.letter()), Some(kind));
        }
        assert_eq!(ComponentKind::from_letter('L'), None);
    }
}
