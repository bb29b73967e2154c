//! Closed-form calibration of the cooling model.
//!
//! Given:
//! - the peak object temperature `T0`
//! - the ambient average `Ta`
//! - one reference sample `(T, t)`
//!
//! the model `T(t) = C * exp(k * t) + Ta` is pinned by
//! `C = T0 - Ta` and `k = ln((T - Ta) / C) / t`.

use crate::domain::{CoolingModel, RefTimeMode, SampleSeries, SummaryStats};
use crate::error::ModelError;

/// Solve `C` and `k` from three raw values.
pub fn fit_constants(
    peak: f64,
    ambient: f64,
    ref_value: f64,
    ref_time: f64,
) -> Result<CoolingModel, ModelError> {
    let inputs = [peak, ambient, ref_value, ref_time];
    if !inputs.iter().all(|v| v.is_finite()) {
        return Err(ModelError::Domain("non-finite input to model fit".to_string()));
    }
    if ref_time == 0.0 {
        return Err(ModelError::Domain("reference time must be non-zero".to_string()));
    }

    let c = peak - ambient;
    if c == 0.0 {
        return Err(ModelError::Domain(format!(
            "zero amplitude: peak {peak} equals ambient {ambient}"
        )));
    }

    let ratio = (ref_value - ambient) / c;
    if !(ratio > 0.0 && ratio.is_finite()) {
        return Err(ModelError::Domain(format!(
            "log ratio (T - Ta) / C = {ratio} is not positive"
        )));
    }

    let k = ratio.ln() / ref_time;
    Ok(CoolingModel { c, k, ambient })
}

/// Fit the model on a loaded series using `ref_index` as the reference sample.
pub fn fit_series(
    series: &SampleSeries,
    stats: &SummaryStats,
    ref_index: usize,
    mode: RefTimeMode,
) -> Result<CoolingModel, ModelError> {
    if ref_index >= series.len() {
        return Err(ModelError::Range(format!(
            "reference index {ref_index} is outside the series (n={})",
            series.len()
        )));
    }

    let ref_time = match mode {
        RefTimeMode::Absolute => series.seconds[ref_index],
        RefTimeMode::SincePeak => series.seconds[ref_index] - series.seconds[stats.id_max],
    };

    log::debug!(
        "Fitting with peak={} ambient={} ref=({}, {ref_time}) at index {ref_index}",
        stats.max_a,
        stats.avg,
        series.sensor_a[ref_index]
    );

    fit_constants(stats.max_a, stats.avg, series.sensor_a[ref_index], ref_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict;
    use proptest::prelude::*;

    #[test]
    fn fit_known_scenario() {
        let model = fit_constants(100.0, 20.0, 50.0, 10.0).unwrap();
        assert_eq!(model.c, 80.0);
        assert!((model.k - (30.0f64 / 80.0).ln() / 10.0).abs() < 1e-15);
        assert!((model.k + 0.09808).abs() < 1e-5);
        assert_eq!(model.ambient, 20.0);
    }

    #[test]
    fn zero_amplitude_is_a_domain_error() {
        let err = fit_constants(20.0, 20.0, 50.0, 10.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(_)));
    }

    #[test]
    fn zero_reference_time_is_a_domain_error() {
        let err = fit_constants(100.0, 20.0, 50.0, 0.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(_)));
    }

    #[test]
    fn reference_below_ambient_is_a_domain_error() {
        // (10 - 20) / 80 < 0: no real logarithm.
        let err = fit_constants(100.0, 20.0, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(_)));
    }

    #[test]
    fn reference_at_ambient_is_a_domain_error() {
        let err = fit_constants(100.0, 20.0, 20.0, 10.0).unwrap_err();
        assert!(matches!(err, ModelError::Domain(_)));
    }

    #[test]
    fn warming_model_yields_positive_k() {
        // Reference further from ambient than the peak: the ratio exceeds 1.
        let model = fit_constants(30.0, 20.0, 40.0, 5.0).unwrap();
        assert!(model.k > 0.0);
    }

    #[test]
    fn fit_series_rejects_out_of_range_reference() {
        let mut series = SampleSeries::default();
        series.push("0".into(), 0.0, 100.0, 20.0);
        series.push("1".into(), 1.0, 60.0, 20.0);
        let stats = SummaryStats::from_series(&series).unwrap();
        let err = fit_series(&series, &stats, 300, RefTimeMode::Absolute).unwrap_err();
        assert!(matches!(err, ModelError::Range(_)));
    }

    #[test]
    fn fit_series_since_peak_measures_from_peak_sample() {
        let mut series = SampleSeries::default();
        series.push("10".into(), 10.0, 50.0, 20.0);
        series.push("20".into(), 20.0, 100.0, 20.0);
        series.push("30".into(), 30.0, 50.0, 20.0);
        let stats = SummaryStats::from_series(&series).unwrap();

        let since_peak = fit_series(&series, &stats, 2, RefTimeMode::SincePeak).unwrap();
        let absolute = fit_series(&series, &stats, 2, RefTimeMode::Absolute).unwrap();
        assert!((since_peak.k - (30.0f64 / 80.0).ln() / 10.0).abs() < 1e-12);
        assert!((absolute.k - (30.0f64 / 80.0).ln() / 30.0).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn fitted_model_reproduces_reference_sample(
            ambient in -50.0f64..50.0,
            amplitude in 1.0f64..200.0,
            fraction in 0.01f64..0.99,
            ref_time in 0.5f64..5_000.0,
        ) {
            let peak = ambient + amplitude;
            let ref_value = ambient + amplitude * fraction;
            let model = fit_constants(peak, ambient, ref_value, ref_time).unwrap();
            prop_assert_eq!(model.c, peak - ambient);
            prop_assert!((predict(&model, ref_time) - ref_value).abs() < 1e-9);
        }
    }
}
