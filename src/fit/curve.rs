//! Ideal (model-predicted) curve on the measured time grid.

use crate::domain::CoolingModel;
use crate::error::ModelError;
use crate::math::round_down;
use crate::models::predict;

/// Decimal places kept on predicted points.
pub const CURVE_DECIMALS: u32 = 4;

/// Predict `count` points aligned with `time`.
///
/// Before `id_max` the object is assumed to sit at ambient; from `id_max`
/// onward the model decays from the peak, with elapsed time measured from
/// `time[id_max]`. Decayed points are truncated to four decimals.
pub fn generate_ideal_curve(
    count: usize,
    id_max: usize,
    model: &CoolingModel,
    time: &[f64],
) -> Result<Vec<f64>, ModelError> {
    if id_max >= count {
        return Err(ModelError::Range(format!(
            "peak index {id_max} is outside the curve (count={count})"
        )));
    }
    if time.len() < count {
        return Err(ModelError::Range(format!(
            "time grid has {} points but {count} were requested",
            time.len()
        )));
    }

    let t0 = time[id_max];
    let curve = (0..count)
        .map(|x| {
            if x < id_max {
                model.ambient
            } else {
                round_down(predict(model, time[x] - t0), CURVE_DECIMALS)
            }
        })
        .collect();

    Ok(curve)
}
