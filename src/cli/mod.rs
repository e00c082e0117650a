//! Interactive menu for the `nodal` binary.
//!
//! The menu reads commands line by line from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so a whole session can be scripted.

mod commands;

use std::io::{BufRead, Write};

use crate::circuit::Circuit;
use crate::error::Result;
use crate::solver::SolverConfig;

/// Digits shown for values and voltages in the menu.
pub const DISPLAY_PRECISION: usize = 6;

const MENU: &str = "\
=== BASIC CIRCUIT ANALYSER ===
1) Add resistor (node - ground)
2) Add voltage source (node - ground)
3) Add capacitor (node - ground)
4) List components
5) Solve nodal (DC)
6) RC transient (analytic if single R/C)
7) Save circuit
8) Load circuit
9) Exit";

/// Menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    AddResistor,
    AddVoltageSource,
    AddCapacitor,
    List,
    SolveDc,
    RcTransient,
    Save,
    Load,
    Exit,
}

impl Command {
    fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Command::AddResistor),
            "2" => Some(Command::AddVoltageSource),
            "3" => Some(Command::AddCapacitor),
            "4" => Some(Command::List),
            "5" => Some(Command::SolveDc),
            "6" => Some(Command::RcTransient),
            "7" => Some(Command::Save),
            "8" => Some(Command::Load),
            "9" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// An interactive session over one circuit.
pub struct Session<R, W> {
    input: R,
    output: W,
    circuit: Circuit,
    config: SolverConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start a session with an empty circuit.
    pub fn new(input: R, output: W) -> Self {
        Self::with_circuit(input, output, Circuit::new())
    }

    /// Start a session with a preloaded circuit.
    pub fn with_circuit(input: R, output: W, circuit: Circuit) -> Self {
        Self {
            input,
            output,
            circuit,
            config: SolverConfig::default(),
        }
    }

    /// Use a custom solver configuration for DC solves.
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// The circuit being edited.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Analysis failures are reported to the user and the loop continues;
    /// only terminal I/O errors end the session early.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(line) = self.prompt("Command> ")? else {
                break;
            };

            match Command::parse(&line) {
                Some(Command::Exit) => break,
                Some(command) => self.dispatch(command)?,
                None => writeln!(self.output, "Unknown command.")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
