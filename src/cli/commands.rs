//! Menu command handlers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use log::warn;

use crate::circuit::NodeId;
use crate::components::ComponentKind;
use crate::error::{NodalError, Result};
use crate::export::export_csv;
use crate::netlist;
use crate::solver::{rc_step_response, solve_with};
use crate::util::{format_g, parse_value};

use super::{Command, Session, DISPLAY_PRECISION};

/// Parse `<value> <node>`.
fn parse_value_and_node(line: &str) -> Result<(f64, NodeId)> {
    let mut fields = line.split_whitespace();
    let value = parse_value(fields.next().unwrap_or_default())?;
    let node = fields
        .next()
        .and_then(|f| f.parse::<i64>().ok())
        .ok_or_else(|| NodalError::invalid_input("expected a node index"))?;
    Ok((value, NodeId::try_from(node)?))
}

/// Parse `<dt> <tmax>`.
fn parse_times(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split_whitespace().map(|f| parse_value(f).ok());
    match (fields.next(), fields.next()) {
        (Some(Some(dt)), Some(Some(tmax))) => Some((dt, tmax)),
        _ => None,
    }
}

fn parse_path(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::AddResistor => self.add(
                ComponentKind::Resistor,
                "Enter resistance (ohm) and node (e.g. 1000 1): ",
            ),
            Command::AddVoltageSource => self.add(
                ComponentKind::VoltageSource,
                "Enter voltage (V) and node (e.g. 5 1): ",
            ),
            Command::AddCapacitor => self.add(
                ComponentKind::Capacitor,
                "Enter capacitance (F) and node (e.g. 1e-6 1): ",
            ),
            Command::List => self.list(),
            Command::SolveDc => self.solve_dc(),
            Command::RcTransient => self.rc_transient(),
            Command::Save => self.save(),
            Command::Load => self.load(),
            Command::Exit => Ok(()),
        }
    }

    /// Add a component between the entered node and ground.
    fn add(&mut self, kind: ComponentKind, prompt: &str) -> Result<()> {
        let Some(line) = self.prompt(prompt)? else {
            return Ok(());
        };

        let added = parse_value_and_node(&line).and_then(|(value, node)| {
            self.circuit
                .add_component(kind, value, node, NodeId::GROUND)
        });
        match added {
            Ok(id) => writeln!(self.output, "Added {kind} (id {}).", id.0)?,
            Err(e) => {
                warn!("rejected {kind}: {e}");
                writeln!(self.output, "{e}")?
            }
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Components (count={}):",
            self.circuit.len()
        )?;
        for c in self.circuit.components() {
            writeln!(
                self.output,
                "  id={} {} value={} nodes={}-{}",
                c.id.0,
                c.kind.letter(),
                format_g(c.value, DISPLAY_PRECISION),
                c.node_pos().index(),
                c.node_neg().index(),
            )?;
        }
        Ok(())
    }

    fn solve_dc(&mut self) -> Result<()> {
        match solve_with(&self.circuit, &self.config) {
            Ok(voltages) => {
                for (node, v) in voltages.iter() {
                    writeln!(
                        self.output,
                        "node {}: {} V",
                        node.index(),
                        format_g(v, DISPLAY_PRECISION)
                    )?;
                }
            }
            Err(e) => {
                warn!("DC solve failed: {e}");
                writeln!(self.output, "Solve failed: {e}")?;
            }
        }
        Ok(())
    }

    fn rc_transient(&mut self) -> Result<()> {
        let Some(line) = self.prompt("Enter dt and tmax (e.g. 1e-4 0.01): ")? else {
            return Ok(());
        };
        let Some((dt, tmax)) = parse_times(&line) else {
            writeln!(self.output, "Invalid input.")?;
            return Ok(());
        };

        let response = match rc_step_response(&self.circuit, dt, tmax) {
            Ok(response) => response,
            Err(e) => {
                warn!("RC step response failed: {e}");
                writeln!(self.output, "RC analytic sim failed: {e}")?;
                return Ok(());
            }
        };

        let Some(line) = self.prompt("Enter CSV filename to export (e.g. out.csv): ")? else {
            return Ok(());
        };
        let Some(path) = parse_path(&line) else {
            writeln!(self.output, "Invalid input.")?;
            return Ok(());
        };

        match export_csv(&response, &path) {
            Ok(()) => writeln!(
                self.output,
                "Exported {} samples to {}",
                response.len(),
                path.display()
            )?,
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Export failed: {e}")?
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let Some(line) = self.prompt("Enter filename to save: ")? else {
            return Ok(());
        };
        let Some(path) = parse_path(&line) else {
            writeln!(self.output, "Invalid input.")?;
            return Ok(());
        };

        match netlist::save(&self.circuit, &path) {
            Ok(()) => writeln!(self.output, "Saved.")?,
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Save failed: {e}")?
            }
        }
        Ok(())
    }

    /// Load a netlist file, appending its components to the current circuit.
    fn load(&mut self) -> Result<()> {
        let Some(line) = self.prompt("Enter filename to load: ")? else {
            return Ok(());
        };
        let Some(path) = parse_path(&line) else {
            writeln!(self.output, "Invalid input.")?;
            return Ok(());
        };

        match netlist::load_into(&mut self.circuit, &path) {
            Ok(added) => writeln!(self.output, "Loaded {added} component(s).")?,
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Load failed: {e}")?
            }
        }
        Ok(())
    }
}
