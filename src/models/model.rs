//! Model evaluation for Newton's law of cooling.
//!
//! The fitter, curve generator and equilibrium search all share one primitive:
//! `T(t) = c * exp(k * t) + ambient`, with `t` measured from the peak.

use crate::domain::CoolingModel;

/// Predict the temperature `t` time units after the peak.
pub fn predict(model: &CoolingModel, t: f64) -> f64 {
    model.c * (model.k * t).exp() + model.ambient
}

impl CoolingModel {
    pub fn new(c: f64, k: f64, ambient: f64) -> Self {
        Self { c, k, ambient }
    }

    /// Whether the model decays toward ambient at all.
    pub fn is_decaying(&self) -> bool {
        self.k < 0.0
    }
}
