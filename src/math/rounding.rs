//! Directional rounding to a fixed number of decimal places.
//!
//! Output values and display labels are truncated, not rounded to nearest:
//! a predicted `20.99999` must print as `20.9999`, never `21.0`.

/// Which way to move a value that is not already on the decimal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundDirection {
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
}

/// Round `num` to `places` decimal places in the given direction.
///
/// The scaled product can land on the wrong side of an integer through
/// binary rounding, so the result is nudged back by one grid step when it
/// crosses `num`. This keeps `round_down(x) <= x` (and the mirrored law for
/// `Ceil`) for every finite input.
pub fn float_round(num: f64, places: u32, direction: RoundDirection) -> f64 {
    if !num.is_finite() {
        return num;
    }

    let scale = 10f64.powi(places as i32);
    let scaled = num * scale;
    match direction {
        RoundDirection::Floor => {
            let n = scaled.floor();
            let out = n / scale;
            if out > num { (n - 1.0) / scale } else { out }
        }
        RoundDirection::Ceil => {
            let n = scaled.ceil();
            let out = n / scale;
            if out < num { (n + 1.0) / scale } else { out }
        }
    }
}

/// Truncate toward negative infinity at `places` decimals.
pub fn round_down(num: f64, places: u32) -> f64 {
    float_round(num, places, RoundDirection::Floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn floor_truncates_instead_of_rounding_to_nearest() {
        assert_eq!(round_down(20.99999, 4), 20.9999);
        assert_eq!(round_down(3.14159, 2), 3.14);
        assert_eq!(round_down(100.0, 4), 100.0);
    }

    #[test]
    fn floor_moves_negative_values_away_from_zero() {
        assert_eq!(round_down(-0.09808, 2), -0.1);
        assert_eq!(round_down(-1.5, 0), -2.0);
    }

    #[test]
    fn ceil_rounds_up() {
        assert_eq!(float_round(3.14159, 2, RoundDirection::Ceil), 3.15);
        assert_eq!(float_round(-0.09808, 2, RoundDirection::Ceil), -0.09);
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert!(round_down(f64::NAN, 2).is_nan());
        assert_eq!(round_down(f64::INFINITY, 2), f64::INFINITY);
    }

    proptest! {
        #[test]
        fn floor_never_exceeds_input_and_stays_within_one_step(
            num in -1.0e4f64..1.0e4,
            places in 0u32..=6,
        ) {
            let rounded = round_down(num, places);
            prop_assert!(rounded <= num);
            prop_assert!(num - rounded < 10f64.powi(-(places as i32)));
        }

        #[test]
        fn ceil_never_falls_below_input(num in -1.0e4f64..1.0e4, places in 0u32..=6) {
            let rounded = float_round(num, places, RoundDirection::Ceil);
            prop_assert!(rounded >= num);
        }
    }
}
