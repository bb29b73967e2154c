//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during the analysis
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default sample used as the reference point for the decay-rate fit.
pub const DEFAULT_REF_INDEX: usize = 300;

/// Default time resolution of the equilibrium search.
pub const DEFAULT_STEP: f64 = 0.01;

/// Default half-width of the band around ambient that counts as "reached".
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Default iteration cap for the equilibrium search.
pub const DEFAULT_MAX_ITERATIONS: u64 = 10_000_000;

/// Which clock the reference sample's time is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RefTimeMode {
    /// Use the raw timestamp of the reference sample.
    Absolute,
    /// Use the time elapsed between the peak sample and the reference sample.
    SincePeak,
}

/// Three aligned channels read from the data file.
///
/// Index `i` refers to the same observation instant in every vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    /// Timestamps exactly as they appeared in the file.
    pub time: Vec<String>,
    /// Numeric value of each timestamp.
    pub seconds: Vec<f64>,
    /// Object (rod) temperature.
    pub sensor_a: Vec<f64>,
    /// Ambient (room) temperature.
    pub sensor_b: Vec<f64>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.sensor_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensor_a.is_empty()
    }

    pub fn push(&mut self, time: String, seconds: f64, a: f64, b: f64) {
        self.time.push(time);
        self.seconds.push(seconds);
        self.sensor_a.push(a);
        self.sensor_b.push(b);
    }
}

/// Summary statistics computed once over a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of observations.
    pub n: usize,
    /// Mean of sensor B (the ambient estimate).
    pub avg: f64,
    /// Maximum of sensor A.
    pub max_a: f64,
    /// First index attaining `max_a`.
    pub id_max: usize,
}

impl SummaryStats {
    /// Fold a series into its summary. Returns `None` for an empty series.
    pub fn from_series(series: &SampleSeries) -> Option<Self> {
        let first = *series.sensor_a.first()?;

        let (sum_b, max_a, id_max) = series
            .sensor_a
            .iter()
            .zip(series.sensor_b.iter())
            .enumerate()
            .fold((0.0, first, 0), |(sum, max, id), (i, (&a, &b))| {
                if a > max {
                    (sum + b, a, i)
                } else {
                    (sum + b, max, id)
                }
            });

        let n = series.len();
        Some(Self {
            n,
            avg: sum_b / n as f64,
            max_a,
            id_max,
        })
    }
}

/// Fitted Newton cooling model: `T(t) = c * exp(k * t) + ambient`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoolingModel {
    /// Amplitude: peak minus ambient.
    pub c: f64,
    /// Signed decay rate; negative for cooling.
    pub k: f64,
    /// Temperature the model decays toward.
    pub ambient: f64,
}

/// Result of the equilibrium search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// Elapsed time (since the peak) at termination.
    pub time: f64,
    /// Model value at `time`.
    pub value: f64,
    /// Number of model evaluations performed.
    pub iterations: u64,
}

/// Resolved run configuration (CLI args mapped into domain terms).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_path: PathBuf,
    pub delimiter: u8,
    pub skip_invalid: bool,

    pub ref_index: usize,
    pub ref_time: RefTimeMode,

    pub step: f64,
    pub tolerance: f64,
    pub max_iterations: u64,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub export_curve: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Configuration with every knob at its default, reading `data_path`.
    pub fn for_path(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            delimiter: b',',
            skip_invalid: false,
            ref_index: DEFAULT_REF_INDEX,
            ref_time: RefTimeMode::Absolute,
            step: DEFAULT_STEP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            plot: false,
            plot_width: 100,
            plot_height: 25,
            export_results: None,
            export_curve: None,
        }
    }
}

/// Predicted values on the input time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveGrid {
    pub time: Vec<f64>,
    pub predicted: Vec<f64>,
}

/// Portable JSON representation of a finished analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub ref_index: usize,
    pub ref_time: RefTimeMode,
    pub model: CoolingModel,
    pub stats: SummaryStats,
    pub equilibrium: Equilibrium,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytic_time: Option<f64>,
    pub grid: CurveGrid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(a: &[f64], b: &[f64]) -> SampleSeries {
        let mut s = SampleSeries::default();
        for (i, (&a, &b)) in a.iter().zip(b).enumerate() {
            s.push(i.to_string(), i as f64, a, b);
        }
        s
    }

    #[test]
    fn summary_takes_first_index_of_maximum() {
        let s = series(&[20.0, 80.0, 75.0, 80.0], &[19.0, 21.0, 20.0, 20.0]);
        let stats = SummaryStats::from_series(&s).unwrap();
        assert_eq!(stats.n, 4);
        assert_eq!(stats.max_a, 80.0);
        assert_eq!(stats.id_max, 1);
        assert!((stats.avg - 20.0).abs() < 1e-12);
    }

    #[test]
    fn summary_handles_all_negative_readings() {
        let s = series(&[-5.0, -3.0, -4.0], &[-10.0, -10.0, -10.0]);
        let stats = SummaryStats::from_series(&s).unwrap();
        assert_eq!(stats.max_a, -3.0);
        assert_eq!(stats.id_max, 1);
    }

    #[test]
    fn summary_of_empty_series_is_none() {
        assert!(SummaryStats::from_series(&SampleSeries::default()).is_none());
    }
}
