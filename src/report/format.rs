//! Formatted terminal output and chart labels.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)
//!
//! Label values are truncated (floored) to two decimals, never rounded to
//! nearest.

use crate::app::pipeline::RunOutput;
use crate::domain::{AnalysisConfig, CoolingModel, RefTimeMode};
use crate::math::round_down;
use crate::report::compute_residuals;

/// Decimal places shown in chart labels.
pub const LABEL_DECIMALS: u32 = 2;

/// Truncate for display, keeping a trailing `.0` on whole numbers.
pub fn fmt_label(v: f64) -> String {
    let v = round_down(v, LABEL_DECIMALS);
    let mut out = format!("{v}");
    if v.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    out
}

/// Title of the room-temperature chart.
pub fn room_title(avg: f64) -> String {
    format!("Room Temperature AVG:{}", fmt_label(avg))
}

/// Title of the ideal-curve chart: the model formula with truncated constants.
pub fn model_title(model: &CoolingModel) -> String {
    format!(
        "{}*exp({}*t)+{}",
        fmt_label(model.c),
        fmt_label(model.k),
        fmt_label(model.ambient)
    )
}

/// Format the full run summary (dataset stats + constants + equilibrium).
pub fn format_run_summary(run: &RunOutput, config: &AnalysisConfig) -> String {
    let ingest = &run.ingest;
    let stats = &ingest.stats;
    let mut out = String::new();

    out.push_str("=== cool - Newton Cooling Fit ===\n");
    out.push_str(&format!("Source: {}\n", config.data_path.display()));
    out.push_str(&format!(
        "Samples: n={} | rows read={} | skipped={}\n",
        stats.n,
        ingest.rows_read,
        ingest.row_errors.len()
    ));
    for e in &ingest.row_errors {
        out.push_str(&format!("  (line {}) {}\n", e.line, e.message));
    }

    out.push_str(&format!("Ambient (sensor B avg): {:.4}\n", stats.avg));
    out.push_str(&format!(
        "Peak (sensor A max): {} at index {} (t={})\n",
        stats.max_a, stats.id_max, ingest.series.time[stats.id_max]
    ));
    let clock = match config.ref_time {
        RefTimeMode::Absolute => "absolute time",
        RefTimeMode::SincePeak => "time since peak",
    };
    out.push_str(&format!("Reference sample: index {} ({clock})\n", config.ref_index));

    out.push_str("\nModel:\n");
    out.push_str(&format!("Constant C is equal to: {}\n", run.model.c));
    out.push_str(&format!("Constant k is equal to {}\n", run.model.k));
    out.push_str(&format!("- T(t) = {}\n", model_title(&run.model)));
    if let Some(r) = compute_residuals(&ingest.series.sensor_a, &run.predicted, stats.id_max) {
        out.push_str(&format!(
            "- residuals from peak: n={} RMSE={:.4} max|r|={:.4}\n",
            r.n, r.rmse, r.max_abs
        ));
    }

    out.push_str("\nEquilibrium:\n");
    out.push_str(&format!(
        "- t={:.2} value={:.4} ({} steps of {})\n",
        run.equilibrium.time, run.equilibrium.value, run.equilibrium.iterations, config.step
    ));
    match run.analytic_time {
        Some(t) => out.push_str(&format!("- closed form: t={t:.4}\n")),
        None => out.push_str("- closed form: n/a\n"),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_truncate_to_two_decimals() {
        assert_eq!(fmt_label(20.999), "20.99");
        assert_eq!(fmt_label(80.0), "80.0");
        assert_eq!(fmt_label(-0.09808), "-0.1");
        assert_eq!(room_title(21.456), "Room Temperature AVG:21.45");
    }

    #[test]
    fn labels_never_use_exponent_notation() {
        assert_eq!(fmt_label(1e16), "10000000000000000.0");
        assert_eq!(fmt_label(0.000001), "0.0");
        assert_eq!(fmt_label(-1e16), "-10000000000000000.0");
    }

    #[test]
    fn model_title_matches_formula_layout() {
        let model = CoolingModel::new(79.987, -0.0123, 20.019);
        assert_eq!(model_title(&model), "79.98*exp(-0.02*t)+20.01");
    }
}
