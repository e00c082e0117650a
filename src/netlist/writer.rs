//! Netlist serialisation.

use std::io::{self, Write};

use crate::circuit::Circuit;
use crate::components::Component;
use crate::util::format_g;

use super::NETLIST_PRECISION;

/// Write `circuit` in netlist form.
pub fn write_netlist<W: Write>(circuit: &Circuit, writer: &mut W) -> io::Result<()> {
    writer.write_all(to_string(circuit).as_bytes())
}

/// Render `circuit` as netlist text.
pub fn to_string(circuit: &Circuit) -> String {
    let mut text = format!("# node_count {}\n", circuit.node_count());
    for component in circuit.components() {
        text.push_str(&entry_line(component));
        text.push('\n');
    }
    text
}

/// `<type> <id> <value> <node+> <node->` for one component.
fn entry_line(component: &Component) -> String {
    format!(
        "{} {} {} {} {}",
        component.kind.letter(),
        component.id.0,
        format_g(component.value, NETLIST_PRECISION),
        component.node_pos().index(),
        component.node_neg().index(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;
    use crate::components::ComponentKind;

    #[test]
    fn test_empty_circuit() {
        assert_eq!(to_string(&Circuit::new()), "# node_count 1\n");
    }

    #[test]
    fn test_component_lines() {
        let mut circuit = Circuit::new();
        circuit
            .add_component(ComponentKind::VoltageSource, 5.0, NodeId(1), NodeId(0))
            .unwrap();
        circuit
            .add_component(ComponentKind::Resistor, 4700.0, NodeId(1), NodeId(2))
            .unwrap();
        circuit
            .add_component(ComponentKind::Capacitor, 2.2e-6, NodeId(2), NodeId(0))
            .unwrap();

        assert_eq!(
            to_string(&circuit),
            "# node_count 3\nV 1 5 1 0\nR 2 4700 1 2\nC 3 2.2e-06 2 0\n"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_matches_text_and_reports_failure() {
        let mut circuit = Circuit::new();
        circuit
            .add_component(ComponentKind::Resistor, 1e3, NodeId(1), NodeId(0))
            .unwrap();

        let mut buffer = Vec::new();
        write_netlist(&circuit, &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_string(&circuit));

        let err = write_netlist(&circuit, &mut FailingWriter).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
