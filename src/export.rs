//! CSV export of step-response samples.
//!
//! ```text
//! time,voltage_node_1
//! 0,0
//! 0.0001,0.475812296
//! ```

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{NodalError, Result};
use crate::solver::StepResponse;
use crate::util::format_g;

/// Significant digits used for exported samples.
pub const CSV_PRECISION: usize = 9;

/// Write samples as CSV, labelling the column with the response node.
pub fn write_csv<W: Write>(response: &StepResponse, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "time,voltage_node_{}", response.node.index())?;
    for (t, v) in response.iter() {
        writeln!(
            writer,
            "{},{}",
            format_g(t, CSV_PRECISION),
            format_g(v, CSV_PRECISION)
        )?;
    }
    Ok(())
}

/// Write samples to a CSV file.
pub fn export_csv(response: &StepResponse, path: &Path) -> Result<()> {
    let export_error = |e: io::Error| NodalError::Export {
        path: path.display().to_string(),
        source: e,
    };

    let file = fs::File::create(path).map_err(export_error)?;
    let mut writer = BufWriter::new(file);
    write_csv(response, &mut writer).map_err(export_error)?;
    writer.flush().map_err(export_error)?;

    info!("exported {} sample(s) to {}", response.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::NodeId;

    fn response() -> StepResponse {
        StepResponse {
            node: NodeId(3),
            tau: 1e-3,
            times: vec![0.0, 1e-4, 2e-4],
            voltages: vec![0.0, 0.4758122963, 1.0 / 3.0],
        }
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&response(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "time,voltage_node_3\n0,0\n0.0001,0.475812296\n0.0002,0.333333333\n"
        );
    }

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.csv");
        export_csv(&response(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("time,voltage_node_3\n"));
    }

    #[test]
    fn test_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("rc.csv");
        assert!(matches!(
            export_csv(&response(), &path),
            Err(NodalError::Export { .. })
        ));
    }
}
