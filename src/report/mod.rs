//! Reporting utilities: residuals and formatted terminal output.

pub mod format;

pub use format::*;

/// How far the measured object temperature strays from the ideal curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSummary {
    pub n: usize,
    pub rmse: f64,
    pub max_abs: f64,
}

/// Compare measured and predicted values from the peak onward.
///
/// Points before the peak are excluded: the model pins them to ambient.
pub fn compute_residuals(
    measured: &[f64],
    predicted: &[f64],
    id_max: usize,
) -> Option<ResidualSummary> {
    let (sse, max_abs, n) = measured
        .iter()
        .zip(predicted.iter())
        .skip(id_max)
        .map(|(m, p)| m - p)
        .filter(|r| r.is_finite())
        .fold((0.0, 0.0f64, 0usize), |(sse, max, n), r| {
            (sse + r * r, max.max(r.abs()), n + 1)
        });

    if n == 0 {
        return None;
    }
    Some(ResidualSummary {
        n,
        rmse: (sse / n as f64).sqrt(),
        max_abs,
    })
}
