//! Error types for the nodal analyser.
//!
//! This module provides a unified error type [`NodalError`] that covers
//! every failure the analyser can report: rejected input, unsupported
//! circuit topologies, singular systems, and netlist/CSV I/O.

use thiserror::Error;

use crate::components::ComponentKind;

/// Result type alias using [`NodalError`].
pub type Result<T> = std::result::Result<T, NodalError>;

/// Unified error type for all analyser operations.
#[derive(Error, Debug)]
pub enum NodalError {
    // ============ Input Errors ============
    /// A value or node index was rejected at the API boundary
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Matrix and right-hand side sizes disagree
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // ============ Topology Errors ============
    /// The circuit uses a topology the analyser does not handle
    #[error("Unsupported topology: {message}")]
    UnsupportedTopology { message: String },

    /// The RC evaluator needs one component of each kind
    #[error("Circuit has no {kind} (RC step response needs one resistor, capacitor and voltage source)")]
    MissingComponent { kind: ComponentKind },

    // ============ Numerical Errors ============
    /// Pivot magnitude fell below the tolerance during elimination
    #[error("Singular system at column {column} (pivot {pivot:.2e}) - a node may have no path to a fixed voltage")]
    SingularSystem { column: usize, pivot: f64 },

    // ============ I/O Errors ============
    /// Malformed netlist line
    #[error("Netlist error at line {line}: {message}")]
    NetlistParse { line: usize, message: String },

    /// Error reading a netlist file
    #[error("Failed to read circuit file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a netlist file
    #[error("Failed to write circuit file '{path}': {source}")]
    FileWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing sample data
    #[error("Failed to export samples to '{path}': {source}")]
    Export {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading commands or writing output in the interactive menu
    #[error("Terminal I/O error: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}

impl NodalError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an unsupported topology error
    pub fn unsupported_topology(message: impl Into<String>) -> Self {
        Self::UnsupportedTopology {
            message: message.into(),
        }
    }

    /// Create a netlist parse error
    pub fn netlist_parse(line: usize, message: impl Into<String>) -> Self {
        Self::NetlistParse {
            line,
            message: message.into(),
        }
    }
}
