//! Component validation at the circuit boundary.

use super::types::{NodeId, MAX_NODES};
use crate::components::ComponentKind;
use crate::error::{NodalError, Result};

/// Validate a component value before it enters a circuit.
///
/// Checks:
/// - The value is finite
/// - Resistances and capacitances are strictly positive
///
/// Voltage sources may carry any finite value, including negative ones.
pub fn validate_value(kind: ComponentKind, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(NodalError::invalid_input(format!(
            "{kind} value must be finite, got {value}"
        )));
    }

    match kind {
        ComponentKind::Resistor | ComponentKind::Capacitor if value <= 0.0 => {
            Err(NodalError::invalid_input(format!(
                "{kind} value must be positive, got {value} {}",
                kind.unit()
            )))
        }
        _ => Ok(()),
    }
}

/// Validate a node index against [`MAX_NODES`].
pub fn validate_node(node: NodeId) -> Result<()> {
    if node.index() >= MAX_NODES {
        return Err(NodalError::invalid_input(format!(
            "node index {} exceeds the limit of {}",
            node.index(),
            MAX_NODES - 1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_normal_values() {
        assert!(validate_value(ComponentKind::Resistor, 1e3).is_ok());
        assert!(validate_value(ComponentKind::Capacitor, 1e-9).is_ok());
        assert!(validate_value(ComponentKind::VoltageSource, -12.0).is_ok());
        assert!(validate_value(ComponentKind::VoltageSource, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(validate_value(ComponentKind::Resistor, 0.0).is_err());
        assert!(validate_value(ComponentKind::Capacitor, -1e-6).is_err());
        assert!(validate_value(ComponentKind::VoltageSource, f64::NAN).is_err());
        assert!(validate_value(ComponentKind::Resistor, f64::INFINITY).is_err());
    }

    #[test]
    fn test_node_limit() {
        assert!(validate_node(NodeId::GROUND).is_ok());
        assert!(validate_node(NodeId(MAX_NODES - 1)).is_ok());
        assert!(matches!(
            validate_node(NodeId(MAX_NODES)),
            Err(NodalError::InvalidInput { .. })
        ));
        assert!(validate_node(NodeId(usize::MAX)).is_err());
    }
}
