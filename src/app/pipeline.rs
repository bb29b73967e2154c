//! Shared analysis pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> summary -> fit constants -> ideal curve -> equilibrium
//!
//! Front-ends (CLI printing, plotting, exports) consume `RunOutput`.

use crate::domain::{AnalysisConfig, CoolingModel, Equilibrium};
use crate::error::AppError;
use crate::fit::{
    EquilibriumOptions, analytic_equilibrium_time, estimate_equilibrium, fit_series,
    generate_ideal_curve,
};
use crate::io::ingest::{IngestedData, load_samples};

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub ingest: IngestedData,
    pub model: CoolingModel,
    pub predicted: Vec<f64>,
    pub equilibrium: Equilibrium,
    pub analytic_time: Option<f64>,
}

/// Load the configured data file and run the analysis.
pub fn run_analysis(config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    let ingest = load_samples(config)?;
    analyze(ingest, config)
}

/// Run the analysis on already-loaded samples.
pub fn analyze(ingest: IngestedData, config: &AnalysisConfig) -> Result<RunOutput, AppError> {
    let series = &ingest.series;
    let stats = &ingest.stats;

    let model = fit_series(series, stats, config.ref_index, config.ref_time)?;
    log::info!("Fitted C={} k={} ambient={}", model.c, model.k, model.ambient);
    if !model.is_decaying() {
        log::warn!(
            "k={} does not decay; the equilibrium search will hit its iteration cap",
            model.k
        );
    }

    let predicted = generate_ideal_curve(series.len(), stats.id_max, &model, &series.seconds)?;

    let opts = EquilibriumOptions {
        step: config.step,
        tolerance: config.tolerance,
        max_iterations: config.max_iterations,
    };
    let equilibrium = estimate_equilibrium(&model, &opts)?;
    let analytic_time = analytic_equilibrium_time(&model, config.tolerance);
    log::info!(
        "Equilibrium after t={:.2} (value={:.4}, closed form {:?})",
        equilibrium.time,
        equilibrium.value,
        analytic_time
    );

    Ok(RunOutput {
        ingest,
        model,
        predicted,
        equilibrium,
        analytic_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::load_samples_from_reader;

    fn cooling_csv() -> String {
        // Flat at 25 for 3 samples, peak at 100 at t=3, then exact decay with k=-0.1 toward 20.
        let mut out = String::new();
        for i in 0..3 {
            out.push_str(&format!("{i},25.0,20.0\n"));
        }
        for i in 3..40 {
            let t = (i - 3) as f64;
            let a = 80.0 * (-0.1 * t).exp() + 20.0;
            out.push_str(&format!("{i},{a},20.0\n"));
        }
        out
    }

    #[test]
    fn analyze_recovers_decay_rate() {
        let ingest = load_samples_from_reader(cooling_csv().as_bytes(), b',', false).unwrap();
        let mut config = AnalysisConfig::for_path("in-memory");
        config.ref_index = 13;
        config.ref_time = crate::domain::RefTimeMode::SincePeak;

        let run = analyze(ingest, &config).unwrap();
        assert!((run.model.c - 80.0).abs() < 1e-12);
        assert!((run.model.k + 0.1).abs() < 1e-9);
        assert_eq!(run.predicted.len(), 40);
        assert_eq!(&run.predicted[..3], &[20.0, 20.0, 20.0]);
        assert_eq!(run.predicted[3], 100.0);
        assert!(run.equilibrium.value > 19.0 && run.equilibrium.value < 21.0);
    }

    #[test]
    fn reference_index_outside_data_is_a_model_error() {
        let ingest = load_samples_from_reader(cooling_csv().as_bytes(), b',', false).unwrap();
        let config = AnalysisConfig::for_path("in-memory");

        let err = analyze(ingest, &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("Range error"), "{err}");
    }
}
