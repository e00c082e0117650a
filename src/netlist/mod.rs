//! Plain-text netlist persistence.
//!
//! A saved circuit is a header comment followed by one line per component:
//!
//! ```text
//! # node_count 3
//! V 1 5 1 0
//! R 2 1000 1 2
//! R 3 2200 2 0
//! ```
//!
//! Fields are `<type> <id> <value> <node+> <node->` with type `R`, `V` or
//! `C`. Values are written with 12 significant digits and may carry an SI
//! suffix (`10k`, `100n`) when written by hand. Lines starting with `#` are
//! comments, except that a `node_count` header raises the node count of
//! the loaded circuit. Ids in the file are informational: loading assigns
//! fresh ids in file order.

mod parser;
mod writer;

pub use parser::{parse_netlist, Netlist, NetlistEntry};
pub use writer::{to_string, write_netlist};

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use log::info;

use crate::circuit::Circuit;
use crate::error::{NodalError, Result};

/// Significant digits used for component values.
pub const NETLIST_PRECISION: usize = 12;

/// Parse netlist text into a new circuit.
pub fn parse(input: &str) -> Result<Circuit> {
    let mut circuit = Circuit::new();
    parse_into(&mut circuit, input)?;
    Ok(circuit)
}

/// Append the components described by `input` to `circuit`.
///
/// Returns the number of components added. On error the circuit is left
/// unchanged.
pub fn parse_into(circuit: &mut Circuit, input: &str) -> Result<usize> {
    let netlist = parse_netlist(input)?;
    apply(circuit, &netlist)
}

fn apply(circuit: &mut Circuit, netlist: &Netlist) -> Result<usize> {
    // Stage on a copy so a failure leaves `circuit` untouched
    let mut staged = circuit.clone();
    for entry in &netlist.entries {
        staged.add_component(entry.kind, entry.value, entry.nodes[0], entry.nodes[1])?;
    }
    if let Some(count) = netlist.node_count {
        staged.reserve_nodes(count)?;
    }
    *circuit = staged;
    Ok(netlist.entries.len())
}

/// Save a circuit to a file.
pub fn save(circuit: &Circuit, path: &Path) -> Result<()> {
    let write_error = |e: std::io::Error| NodalError::FileWrite {
        path: path.display().to_string(),
        source: e,
    };

    let file = fs::File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    write_netlist(circuit, &mut writer).map_err(write_error)?;
    writer
        .into_inner()
        .map_err(|e| write_error(e.into_error()))?
        .sync_all()
        .map_err(write_error)?;

    info!(
        "saved {} component(s) to {}",
        circuit.len(),
        path.display()
    );
    Ok(())
}

/// Load a circuit file into a new circuit.
pub fn load(path: &Path) -> Result<Circuit> {
    let mut circuit = Circuit::new();
    load_into(&mut circuit, path)?;
    Ok(circuit)
}

/// Append the components of a circuit file to `circuit`.
pub fn load_into(circuit: &mut Circuit, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(|e| NodalError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    let added = parse_into(circuit, &content)?;
    info!("loaded {added} component(s) from {}", path.display());
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;
    use crate::components::ComponentKind;
    use approx::assert_relative_eq;

    fn tuples(circuit: &Circuit) -> Vec<(ComponentKind, f64, NodeId, NodeId)> {
        circuit
            .components()
            .iter()
            .map(|c| (c.kind, c.value, c.node_pos(), c.node_neg()))
            .collect()
    }

    fn sample_circuit() -> Circuit {
        let mut circuit = Circuit::new();
        let parts = [
            (ComponentKind::VoltageSource, 5.0, 1, 0),
            (ComponentKind::Resistor, 1e3, 1, 2),
            (ComponentKind::Resistor, 2.2e3, 2, 0),
            (ComponentKind::Capacitor, 4.7e-9, 2, 0),
            (ComponentKind::VoltageSource, -12.5, 0, 6),
            (ComponentKind::Resistor, 1.0 / 3.0, 6, 3),
        ];
        for (kind, value, pos, neg) in parts {
            circuit
                .add_component(kind, value, NodeId(pos), NodeId(neg))
                .unwrap();
        }
        circuit
    }

    #[test]
    fn test_text_round_trip() {
        let circuit = sample_circuit();
        let reloaded = parse(&to_string(&circuit)).unwrap();

        assert_eq!(reloaded.node_count(), circuit.node_count());
        let (before, after) = (tuples(&circuit), tuples(&reloaded));
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!((b.0, b.2, b.3), (a.0, a.2, a.3));
            assert_relative_eq!(b.1, a.1, max_relative = 1e-11);
        }
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("divider.txt");
        let circuit = sample_circuit();

        save(&circuit, &path).unwrap();
        let reloaded = load(&path).unwrap();

        assert_eq!(reloaded.len(), circuit.len());
        assert_eq!(reloaded.node_count(), circuit.node_count());
    }

    #[test]
    fn test_load_appends_with_fresh_ids() {
        let mut circuit = Circuit::new();
        circuit
            .add_component(ComponentKind::Resistor, 10.0, NodeId(1), NodeId(0))
            .unwrap();

        let added = parse_into(&mut circuit, "R 7 20 2 0\nV 9 1 1 0\n").unwrap();
        assert_eq!(added, 2);
        let ids: Vec<usize> = circuit.components().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_header_raises_node_count() {
        let circuit = parse("# node_count 5\nR 1 100 1 0\n").unwrap();
        assert_eq!(circuit.node_count(), 5);
    }

    #[test]
    fn test_oversized_node_count_is_rejected() {
        let result = parse("# node_count 18446744073709551615\nR 1 100 1 0\n");
        assert!(matches!(result, Err(NodalError::NetlistParse { line: 1, .. })));
    }

    #[test]
    fn test_failed_load_leaves_circuit_unchanged() {
        let mut circuit = sample_circuit();
        let before = tuples(&circuit);

        let result = parse_into(&mut circuit, "R 1 100 1 0\nQ 2 1 1 0\n");
        assert!(matches!(result, Err(NodalError::NetlistParse { line: 2, .. })));
        assert_eq!(tuples(&circuit), before);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.txt"));
        assert!(matches!(result, Err(NodalError::FileRead { .. })));
    }
}
