//! Nodal - Basic Circuit Analyser
//!
//! Interactive DC nodal analyser for resistor, voltage source and capacitor
//! networks referenced to ground.
//!
//! # Usage
//!
//! ```bash
//! nodal                 # start with an empty circuit
//! nodal divider.txt     # load a saved circuit first
//! NODAL_LOG=debug nodal # log every added component to stderr
//! ```

use std::io;
use std::path::PathBuf;

use clap::Parser;
use nodal_core::{cli::Session, error::Result, netlist, Circuit};

/// Basic circuit analyser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Circuit file to load before the menu starts
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let env = env_logger::Env::default()
        .filter_or("NODAL_LOG", "warn")
        .write_style("NODAL_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();

    let circuit = match &args.circuit_file {
        Some(path) => netlist::load(path)?,
        None => Circuit::new(),
    };

    let stdin = io::stdin();
    let mut session = Session::with_circuit(stdin.lock(), io::stdout(), circuit);
    session.run()
}
