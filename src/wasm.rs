//! WASM bindings for Nodal Core.
//!
//! This module exposes the circuit store and both analyses to JavaScript,
//! for browser-based teaching material.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'nodal_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit();
//! circuit.add_voltage_source(5, 1, 0);
//! circuit.add_resistor(1000, 1, 2);
//! circuit.add_resistor(2000, 2, 0);
//!
//! const volts = circuit.solve(); // Float64Array [0, 5, 3.333...]
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, NodeId};
use crate::components::ComponentKind;
use crate::netlist;
use crate::solver::{rc_step_response, solve};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(error: crate::error::NodalError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// WASM-compatible circuit wrapper.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create an empty circuit (ground only).
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuit {
        WasmCircuit {
            circuit: Circuit::new(),
        }
    }

    /// Build a circuit from netlist text.
    #[wasm_bindgen]
    pub fn from_netlist(text: &str) -> Result<WasmCircuit, JsValue> {
        let circuit = netlist::parse(text).map_err(to_js)?;
        Ok(WasmCircuit { circuit })
    }

    /// Render the circuit as netlist text.
    #[wasm_bindgen]
    pub fn to_netlist(&self) -> String {
        netlist::to_string(&self.circuit)
    }

    /// Add a resistor (ohms). Returns the component id.
    #[wasm_bindgen]
    pub fn add_resistor(&mut self, value: f64, node_pos: usize, node_neg: usize) -> Result<usize, JsValue> {
        self.add(ComponentKind::Resistor, value, node_pos, node_neg)
    }

    /// Add a voltage source (volts). Returns the component id.
    #[wasm_bindgen]
    pub fn add_voltage_source(
        &mut self,
        value: f64,
        node_pos: usize,
        node_neg: usize,
    ) -> Result<usize, JsValue> {
        self.add(ComponentKind::VoltageSource, value, node_pos, node_neg)
    }

    /// Add a capacitor (farads). Returns the component id.
    #[wasm_bindgen]
    pub fn add_capacitor(&mut self, value: f64, node_pos: usize, node_neg: usize) -> Result<usize, JsValue> {
        self.add(ComponentKind::Capacitor, value, node_pos, node_neg)
    }

    /// Number of nodes, including ground.
    #[wasm_bindgen(getter)]
    pub fn node_count(&self) -> usize {
        self.circuit.node_count()
    }

    /// Solve the DC operating point.
    ///
    /// # Returns
    /// A Float64Array with one voltage per node, ground first.
    #[wasm_bindgen]
    pub fn solve(&self) -> Result<Vec<f64>, JsValue> {
        solve(&self.circuit).map(|v| v.into_vec()).map_err(to_js)
    }

    /// Compute the RC step response.
    ///
    /// # Returns
    /// A Float64Array of interleaved `time, voltage` pairs.
    #[wasm_bindgen]
    pub fn rc_step_response(&self, dt: f64, tmax: f64) -> Result<Vec<f64>, JsValue> {
        let response = rc_step_response(&self.circuit, dt, tmax).map_err(to_js)?;
        Ok(response.iter().flat_map(|(t, v)| [t, v]).collect())
    }
}

impl WasmCircuit {
    fn add(
        &mut self,
        kind: ComponentKind,
        value: f64,
        node_pos: usize,
        node_neg: usize,
    ) -> Result<usize, JsValue> {
        self.circuit
            .add_component(kind, value, NodeId(node_pos), NodeId(node_neg))
            .map(|id| id.0)
            .map_err(to_js)
    }
}

impl Default for WasmCircuit {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
