//! Synthetic heat-then-cool sensor logs.
//!
//! The object ramps linearly from ambient to the peak, then follows Newton's
//! law of cooling. Both channels get independent Gaussian sensor noise. The
//! output is seeded, so the same settings always produce the same file.

use std::path::Path;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{CoolingModel, SampleSeries};
use crate::error::AppError;
use crate::models::predict;

/// Settings for a synthetic run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub samples: usize,
    pub interval: f64,
    pub peak_index: usize,
    pub ambient: f64,
    pub peak: f64,
    pub k: f64,
    pub noise: f64,
    pub seed: u64,
}

pub fn generate_cooling_sample(config: &SimulationConfig) -> Result<SampleSeries, AppError> {
    if config.samples == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if config.peak_index >= config.samples {
        return Err(AppError::new(2, "Peak index must be below the sample count."));
    }
    if !(config.interval.is_finite() && config.interval > 0.0) {
        return Err(AppError::new(2, "Sample interval must be positive."));
    }
    if !(config.ambient.is_finite() && config.peak.is_finite() && config.k.is_finite()) {
        return Err(AppError::new(2, "Temperatures and decay rate must be finite."));
    }
    if !(config.noise.is_finite() && config.noise >= 0.0) {
        return Err(AppError::new(2, "Noise must be non-negative."));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.noise)
        .map_err(|e| AppError::new(2, format!("Noise distribution error: {e}")))?;

    let model = CoolingModel {
        c: config.peak - config.ambient,
        k: config.k,
        ambient: config.ambient,
    };

    let mut series = SampleSeries::default();
    for i in 0..config.samples {
        let t = i as f64 * config.interval;
        let clean = if i < config.peak_index {
            let u = i as f64 / config.peak_index as f64;
            config.ambient + u * (config.peak - config.ambient)
        } else {
            predict(&model, t - config.peak_index as f64 * config.interval)
        };

        let a = clean + normal.sample(&mut rng);
        let b = config.ambient + normal.sample(&mut rng);
        series.push(format!("{t:.2}"), t, a, b);
    }

    log::debug!("Generated {} synthetic samples (seed={})", series.len(), config.seed);
    Ok(series)
}

/// Write samples in the ingest format (no header).
pub fn write_samples(path: &Path, series: &SampleSeries, delimiter: u8) -> Result<(), AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|e| {
            AppError::new(2, format!("Failed to create data file '{}': {e}", path.display()))
        })?;

    for i in 0..series.len() {
        let a = format!("{:.3}", series.sensor_a[i]);
        let b = format!("{:.3}", series.sensor_b[i]);
        writer
            .write_record([series.time[i].as_str(), a.as_str(), b.as_str()])
            .map_err(|e| AppError::new(2, format!("Failed to write data row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush data file: {e}")))?;

    log::info!("Wrote {} samples to {}", series.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            samples: 200,
            interval: 0.5,
            peak_index: 20,
            ambient: 22.0,
            peak: 95.0,
            k: -0.02,
            noise: 0.0,
            seed: 7,
        }
    }

    #[test]
    fn noiseless_sample_peaks_at_peak_index() {
        let series = generate_cooling_sample(&config()).unwrap();
        assert_eq!(series.len(), 200);
        assert_eq!(series.sensor_a[0], 22.0);
        assert_eq!(series.sensor_a[20], 95.0);
        assert!(series.sensor_a[21] < 95.0);
        assert!(series.sensor_b.iter().all(|&b| b == 22.0));
        assert_eq!(series.time[3], "1.50");
    }

    #[test]
    fn same_seed_same_noise() {
        let mut cfg = config();
        cfg.noise = 0.3;
        let a = generate_cooling_sample(&cfg).unwrap();
        let b = generate_cooling_sample(&cfg).unwrap();
        assert_eq!(a, b);
        cfg.seed = 8;
        let c = generate_cooling_sample(&cfg).unwrap();
        assert_ne!(a.sensor_a, c.sensor_a);
    }

    #[test]
    fn rejects_peak_past_end() {
        let mut cfg = config();
        cfg.peak_index = 200;
        assert!(generate_cooling_sample(&cfg).is_err());
    }

    #[test]
    fn negative_noise_is_rejected() {
        let mut cfg = config();
        cfg.noise = -1.0;
        let err = generate_cooling_sample(&cfg).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Noise"), "{err}");

        cfg.noise = f64::NAN;
        assert!(generate_cooling_sample(&cfg).is_err());
    }
}
