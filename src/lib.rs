//! # Nodal Core
//!
//! An educational DC circuit analyser.
//!
//! This library provides:
//! - A circuit store for resistors, voltage sources and capacitors tied to
//!   numbered nodes, with node 0 as ground
//! - DC nodal analysis on a reduced conductance system
//! - A closed-form RC step response for a single R/C/V triple
//! - Plain-text netlist persistence and CSV export
//! - An interactive menu (CLI only)
//!
//! ## Architecture
//!
//! - [`circuit`] - Node and component ids, the [`Circuit`] store and input validation
//! - [`components`] - Component records
//! - [`solver`] - Dense Gaussian elimination, nodal assembly and the RC step response
//! - [`netlist`] - Saving and loading circuits
//! - [`export`] - CSV export of step-response samples
//! - [`cli`] - Interactive menu (CLI only)
//!
//! ## Usage
//!
//! ```
//! use nodal_core::{solve, Circuit, ComponentKind, NodeId};
//!
//! let mut circuit = Circuit::new();
//! circuit.add_component(ComponentKind::VoltageSource, 5.0, NodeId(1), NodeId::GROUND)?;
//! circuit.add_component(ComponentKind::Resistor, 1e3, NodeId(1), NodeId(2))?;
//! circuit.add_component(ComponentKind::Resistor, 1e3, NodeId(2), NodeId::GROUND)?;
//!
//! let voltages = solve(&circuit)?;
//! assert!((voltages[2] - 2.5).abs() < 1e-12);
//! # Ok::<(), nodal_core::NodalError>(())
//! ```
//!
//! ## Analysis Method
//!
//! 1. Nodes pinned by grounded voltage sources get their source voltage
//! 2. Every other non-ground node becomes an unknown in `G·v = I`
//! 3. Resistors are stamped into G; resistors reaching a pinned node add
//!    current to I; capacitors are open at DC
//! 4. The system is solved by Gaussian elimination with partial pivoting
//!
//! Every analysis borrows the circuit immutably and returns owned results,
//! so independent circuits can be analysed from different threads.

pub mod circuit;
pub mod components;
pub mod error;
pub mod export;
pub mod netlist;
pub mod solver;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export main types for convenience
pub use circuit::{Circuit, ComponentId, NodeId};
pub use components::{Component, ComponentKind};
pub use error::{NodalError, Result};
pub use solver::{rc_step_response, solve, NodeVoltages, SolverConfig, StepResponse};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;
