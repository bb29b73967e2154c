//! Read/write curve JSON files.
//!
//! Curve JSON is the "portable" representation of a finished analysis:
//! - fitted model constants (C, k, ambient)
//! - summary statistics and the reference-sample settings
//! - the equilibrium estimate
//! - the predicted curve on the measured time grid, for quick plotting
//!
//! The schema is defined by `domain::CurveFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::app::pipeline::RunOutput;
use crate::domain::{AnalysisConfig, CurveFile, CurveGrid};
use crate::error::AppError;

/// Assemble the curve file for a run.
pub fn build_curve_file(run: &RunOutput, config: &AnalysisConfig) -> CurveFile {
    CurveFile {
        tool: "cool".to_string(),
        generated_at: Utc::now(),
        source: config.data_path.display().to_string(),
        ref_index: config.ref_index,
        ref_time: config.ref_time,
        model: run.model,
        stats: run.ingest.stats,
        equilibrium: run.equilibrium,
        analytic_time: run.analytic_time,
        grid: CurveGrid {
            time: run.ingest.series.seconds.clone(),
            predicted: run.predicted.clone(),
        },
    }
}

/// Write a curve JSON file.
pub fn write_curve_json(
    path: &Path,
    run: &RunOutput,
    config: &AnalysisConfig,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create curve JSON '{}': {e}", path.display()))
    })?;

    let curve = build_curve_file(run, config);
    serde_json::to_writer_pretty(file, &curve)
        .map_err(|e| AppError::new(2, format!("Failed to write curve JSON: {e}")))?;

    log::info!("Wrote curve JSON to {}", path.display());
    Ok(())
}

/// Read a curve JSON file.
pub fn read_curve_json(path: &Path) -> Result<CurveFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open curve JSON '{}': {e}", path.display()))
    })?;
    let curve: CurveFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(2, format!("Invalid curve JSON: {e}")))?;

    if curve.grid.time.len() != curve.grid.predicted.len() {
        return Err(AppError::new(2, "Invalid curve JSON: grid columns differ in length."));
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CoolingModel, Equilibrium, RefTimeMode, SummaryStats};

    fn sample_curve() -> CurveFile {
        CurveFile {
            tool: "cool".to_string(),
            generated_at: Utc::now(),
            source: "data.csv".to_string(),
            ref_index: 2,
            ref_time: RefTimeMode::SincePeak,
            model: CoolingModel::new(80.0, -0.1, 20.0),
            stats: SummaryStats {
                n: 3,
                avg: 20.0,
                max_a: 100.0,
                id_max: 0,
            },
            equilibrium: Equilibrium {
                time: 43.83,
                value: 20.99,
                iterations: 4384,
            },
            analytic_time: Some(43.82),
            grid: CurveGrid {
                time: vec![0.0, 1.0, 2.0],
                predicted: vec![100.0, 92.3869, 85.4984],
            },
        }
    }

    #[test]
    fn curve_file_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let curve = sample_curve();
        serde_json::to_writer_pretty(File::create(&path).unwrap(), &curve).unwrap();

        let back = read_curve_json(&path).unwrap();
        assert_eq!(back.model, curve.model);
        assert_eq!(back.grid, curve.grid);
        assert_eq!(back.ref_time, RefTimeMode::SincePeak);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"since-peak\""));
    }

    #[test]
    fn ragged_grid_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("curve.json");
        let mut curve = sample_curve();
        curve.grid.predicted.pop();
        serde_json::to_writer(File::create(&path).unwrap(), &curve).unwrap();

        let err = read_curve_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
