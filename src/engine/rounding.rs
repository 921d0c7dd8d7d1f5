//! Output-boundary rounding for monetary and rate values

/// Round a value to 2 decimal places, half away from zero.
///
/// Applied only at the output boundary; intermediate arithmetic keeps
/// full f64 precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
