//! Time for the modeled object to return to ambient temperature.
//!
//! The search steps forward from the peak at a fixed resolution and stops at
//! the first step whose model value lies strictly inside
//! `(ambient - tolerance, ambient + tolerance)` or equals ambient exactly.
//! A non-decaying model (`k >= 0`) never gets there, so the loop is capped.

use crate::domain::{
    CoolingModel, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP, DEFAULT_TOLERANCE, Equilibrium,
};
use crate::error::ModelError;
use crate::models::predict;

/// Search resolution and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumOptions {
    pub step: f64,
    pub tolerance: f64,
    pub max_iterations: u64,
}

impl Default for EquilibriumOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

fn reached(value: f64, ambient: f64, tolerance: f64) -> bool {
    value == ambient || (ambient - tolerance < value && value < ambient + tolerance)
}

/// Step forward until the model value reaches the ambient band.
pub fn estimate_equilibrium(
    model: &CoolingModel,
    opts: &EquilibriumOptions,
) -> Result<Equilibrium, ModelError> {
    if !(opts.step.is_finite() && opts.step > 0.0) {
        return Err(ModelError::Domain(format!(
            "search step must be positive, got {}",
            opts.step
        )));
    }
    if !(opts.tolerance.is_finite() && opts.tolerance >= 0.0) {
        return Err(ModelError::Domain(format!(
            "tolerance must be non-negative, got {}",
            opts.tolerance
        )));
    }

    // Time is derived from the step count so long searches do not accumulate drift.
    for i in 0..opts.max_iterations {
        let time = i as f64 * opts.step;
        let value = predict(model, time);
        if reached(value, model.ambient, opts.tolerance) {
            log::debug!("Equilibrium reached after {} steps", i + 1);
            return Ok(Equilibrium {
                time,
                value,
                iterations: i + 1,
            });
        }
    }

    Err(ModelError::Timeout {
        iterations: opts.max_iterations,
        time: opts.max_iterations as f64 * opts.step,
    })
}

/// Closed-form crossing time of `|C| * exp(k t) = tolerance`.
///
/// `Some(0.0)` when the model already starts inside the band, `None` when it
/// never decays into it.
pub fn analytic_equilibrium_time(model: &CoolingModel, tolerance: f64) -> Option<f64> {
    let amplitude = model.c.abs();
    if amplitude < tolerance {
        return Some(0.0);
    }
    if !model.is_decaying() || tolerance <= 0.0 {
        return None;
    }
    Some((tolerance / amplitude).ln() / model.k)
}
