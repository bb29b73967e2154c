//! Export per-sample results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::SampleSeries;
use crate::error::AppError;

/// Write measured channels next to the predicted curve.
pub fn write_results_csv(
    path: &Path,
    series: &SampleSeries,
    predicted: &[f64],
) -> Result<(), AppError> {
    if predicted.len() != series.len() {
        return Err(AppError::new(
            4,
            format!(
                "Predicted curve length {} does not match series length {}.",
                predicted.len(),
                series.len()
            ),
        ));
    }

    let file = File::create(path).map_err(|e| {
        AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;
    let mut file = BufWriter::new(file);

    writeln!(file, "time,sensor_a,sensor_b,predicted,residual")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for (i, &y_fit) in predicted.iter().enumerate() {
        let a = series.sensor_a[i];
        writeln!(
            file,
            "{},{},{},{:.4},{:.4}",
            series.time[i],
            a,
            series.sensor_b[i],
            y_fit,
            a - y_fit,
        )
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    file.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;

    log::info!("Wrote {} rows to {}", predicted.len(), path.display());
    Ok(())
}
