//! Delimited sensor-log ingest.
//!
//! Each line of the input holds one observation:
//!
//! ```text
//! timestamp, sensor_a, sensor_b
//! ```
//!
//! There is no header row. By default any malformed line aborts the load with
//! its line number; with `skip_invalid` such lines are collected as row errors
//! and the rest of the file is still used.

use std::fs::File;
use std::io::Read;

use csv::StringRecord;

use crate::domain::{AnalysisConfig, SampleSeries, SummaryStats};
use crate::error::AppError;

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Ingest output: aligned channels + summary + skipped rows.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub series: SampleSeries,
    pub stats: SummaryStats,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Load the data file named by `config`.
pub fn load_samples(config: &AnalysisConfig) -> Result<IngestedData, AppError> {
    let file = File::open(&config.data_path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to open data file '{}': {e}", config.data_path.display()),
        )
    })?;

    log::info!("Loading samples from {}", config.data_path.display());
    load_samples_from_reader(file, config.delimiter, config.skip_invalid)
}

/// Load samples from any reader. Exposed for tests and in-memory inputs.
pub fn load_samples_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
    skip_invalid: bool,
) -> Result<IngestedData, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut series = SampleSeries::default();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        rows_read += 1;

        let parsed = result
            .map_err(|e| {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(idx + 1);
                (line, format!("CSV parse error: {e}"))
            })
            .and_then(|record| {
                let line = record.position().map(|p| p.line() as usize).unwrap_or(idx + 1);
                parse_row(&record).map_err(|msg| (line, msg))
            });

        match parsed {
            Ok((time, seconds, a, b)) => series.push(time, seconds, a, b),
            Err((line, message)) => {
                if !skip_invalid {
                    return Err(AppError::new(2, format!("Line {line}: {message}")));
                }
                log::warn!("Skipping line {line}: {message}");
                row_errors.push(RowError { line, message });
            }
        }
    }

    let stats = SummaryStats::from_series(&series)
        .ok_or_else(|| AppError::new(3, "No valid samples in data file."))?;

    log::info!(
        "Loaded {} samples (avg ambient={:.4}, peak={} at index {})",
        stats.n,
        stats.avg,
        stats.max_a,
        stats.id_max
    );

    Ok(IngestedData {
        series,
        stats,
        row_errors,
        rows_read,
    })
}

fn parse_row(record: &StringRecord) -> Result<(String, f64, f64, f64), String> {
    if record.len() != 3 {
        return Err(format!("expected 3 fields, found {}", record.len()));
    }

    let time = record[0].to_string();
    let seconds = parse_f64(&record[0], "timestamp")?;
    let a = parse_f64(&record[1], "sensor A")?;
    let b = parse_f64(&record[2], "sensor B")?;

    Ok((time, seconds, a, b))
}

fn parse_f64(s: &str, field: &str) -> Result<f64, String> {
    let v: f64 = s
        .parse()
        .map_err(|_| format!("invalid {field} value '{s}'"))?;
    if !v.is_finite() {
        return Err(format!("non-finite {field} value '{s}'"));
    }
    Ok(v)
}
