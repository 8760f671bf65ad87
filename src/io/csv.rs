//! CSV serialization of resistance result sets.
//!
//! Layout: one header row naming the fields of the active result set,
//! then one row per speed sample, every float printed with four
//! decimals. The column set depends on the method — the simple estimate
//! has no viscous breakdown, so those columns are absent rather than
//! empty.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::info;

use crate::resistance::ResultSet;

/// Error type for CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export was requested before any compute call succeeded.
    #[error("no results available; run a compute method first")]
    NoResult,

    /// I/O error writing the file.
    #[error("CSV I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default output name, e.g. `resistance_results_20260807_142530.csv`.
fn default_filename() -> PathBuf {
    PathBuf::from(format!(
        "resistance_results_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Write a result set as CSV, returning the path actually written.
///
/// With `path` unset, a timestamped filename in the working directory
/// is generated.
pub fn write_csv(results: &ResultSet, path: Option<&Path>) -> Result<PathBuf, ExportError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_filename);
    let mut out = BufWriter::new(File::create(&path)?);

    match &results.viscous {
        Some(viscous) => {
            writeln!(
                out,
                "speed_mps,speed_knots,froude,reynolds,cf,friction_n,residual_n,total_n,total_kn,power_kw"
            )?;
            for i in 0..results.len() {
                writeln!(
                    out,
                    "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                    results.speed_mps[i],
                    results.speed_knots[i],
                    results.froude[i],
                    viscous.reynolds[i],
                    viscous.cf[i],
                    viscous.friction_n[i],
                    viscous.residual_n[i],
                    results.total_n[i],
                    results.total_kn[i],
                    results.power_kw[i],
                )?;
            }
        }
        None => {
            writeln!(out, "speed_mps,speed_knots,froude,total_n,total_kn,power_kw")?;
            for i in 0..results.len() {
                writeln!(
                    out,
                    "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                    results.speed_mps[i],
                    results.speed_knots[i],
                    results.froude[i],
                    results.total_n[i],
                    results.total_kn[i],
                    results.power_kw[i],
                )?;
            }
        }
    }

    out.flush()?;
    info!(path = %path.display(), rows = results.len(), "exported resistance results");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullGeometry;
    use crate::resistance::ResistanceEngine;

    #[test]
    fn test_holtrop_csv_layout() {
        let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
        let mut engine = ResistanceEngine::new(&hull);
        engine.compute_holtrop(&[5.0, 7.5]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        let written = engine.export_csv(Some(&path)).unwrap();
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "speed_mps,speed_knots,froude,reynolds,cf,friction_n,residual_n,total_n,total_kn,power_kw"
        );
        assert_eq!(lines[1].split(',').count(), 10);
        assert!(lines[1].starts_with("5.0000,"));
    }

    #[test]
    fn test_simple_csv_omits_viscous_columns() {
        let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
        let mut engine = ResistanceEngine::new(&hull);
        engine.compute_simple(&[5.0]).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.csv");
        engine.export_csv(Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "speed_mps,speed_knots,froude,total_n,total_kn,power_kw");
        assert_eq!(lines[1].split(',').count(), 6);
    }

    #[test]
    fn test_export_before_compute_fails() {
        let hull = HullGeometry::new(150.0, 20.0, 8.0, 0.70).unwrap();
        let engine = ResistanceEngine::new(&hull);
        assert!(matches!(
            engine.export_csv(None),
            Err(ExportError::NoResult)
        ));
    }

    #[test]
    fn test_default_filename_shape() {
        let name = default_filename();
        let name = name.to_string_lossy();
        assert!(name.starts_with("resistance_results_"));
        assert!(name.ends_with(".csv"));
        // resistance_results_YYYYMMDD_HHMMSS.csv
        assert_eq!(name.len(), "resistance_results_".len() + 15 + 4);
    }
}
