//! Commercial and rational discount calculations
//!
//! Both use simple interest over the 360-day commercial year:
//! - Commercial discount charges interest on the nominal (face) value
//! - Rational discount charges interest on the present value
//!
//! The engine computes with whatever numbers it is given; range policy
//! (0-100 rates, 1-360 days) belongs to the caller, not here.

use serde::{Deserialize, Serialize};

use super::rounding::round2;

/// Result of a discount calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// Interest deducted from the nominal value
    pub discount: f64,

    /// Value received today, nominal minus discount
    pub present_value: f64,
}

/// Commercial discount: `E = Cn * i * n / 360`
///
/// Interest is computed on the nominal value. Present value is the
/// nominal minus the discount.
pub fn commercial_discount(nominal: f64, rate_percent: f64, days: u32) -> DiscountResult {
    let discount = nominal * (rate_percent / 100.0) * days as f64 / 360.0;
    let present_value = nominal - discount;

    DiscountResult {
        discount: round2(discount),
        present_value: round2(present_value),
    }
}

/// Rational discount: interest computed on the present value
///
/// `Va = Cn / (1 + i * n / 360)`, discount is the remainder. The factor
/// is always >= 1 for non-negative rate and days, so the division is safe
/// under valid preconditions; negative inputs must be rejected upstream.
pub fn rational_discount(nominal: f64, rate_percent: f64, days: u32) -> DiscountResult {
    let factor = 1.0 + (rate_percent / 100.0) * days as f64 / 360.0;
    let present_value = nominal / factor;
    let discount = nominal - present_value;

    DiscountResult {
        discount: round2(discount),
        present_value: round2(present_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_commercial_discount_worked_example() {
        // 5000 nominal at 6% over 90 days: discount 75.00, present value 4925.00
        let result = commercial_discount(5000.0, 6.0, 90);
        assert_abs_diff_eq!(result.discount, 75.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.present_value, 4925.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rational_discount_worked_example() {
        // 3000 nominal at 4% over 180 days: factor 1.02, present value 2941.18
        let result = rational_discount(3000.0, 4.0, 180);
        assert_abs_diff_eq!(result.discount, 58.82, epsilon = 1e-10);
        assert_abs_diff_eq!(result.present_value, 2941.18, epsilon = 1e-10);
    }

    #[test]
    fn test_commercial_discount_sums_to_nominal() {
        for &(nominal, rate, days) in &[
            (5000.0, 6.0, 90),
            (12345.67, 3.25, 47),
            (100.0, 100.0, 360),
            (0.0, 5.0, 30),
        ] {
            let result = commercial_discount(nominal, rate, days);
            assert!(
                (result.discount + result.present_value - nominal).abs() < 0.01,
                "discount + present value should equal nominal for ({}, {}, {})",
                nominal,
                rate,
                days
            );
        }
    }

    #[test]
    fn test_rational_discount_inverts_to_nominal() {
        let (nominal, rate, days) = (8500.0, 7.5, 120);
        let result = rational_discount(nominal, rate, days);
        let factor = 1.0 + (rate / 100.0) * days as f64 / 360.0;
        assert!((result.present_value * factor - nominal).abs() < 0.01);
    }

    #[test]
    fn test_zero_rate_means_no_discount() {
        let commercial = commercial_discount(5000.0, 0.0, 90);
        assert_eq!(commercial.discount, 0.0);
        assert_eq!(commercial.present_value, 5000.0);

        let rational = rational_discount(5000.0, 0.0, 90);
        assert_eq!(rational.discount, 0.0);
        assert_eq!(rational.present_value, 5000.0);
    }

    #[test]
    fn test_rational_below_commercial_for_same_terms() {
        // Interest on the (smaller) present value is always less than
        // interest on the nominal
        let commercial = commercial_discount(10000.0, 8.0, 180);
        let rational = rational_discount(10000.0, 8.0, 180);
        assert!(rational.discount < commercial.discount);
    }

    #[test]
    fn test_out_of_range_inputs_compute_as_given() {
        // The engine is a pure calculator, not a validator: a 150% rate
        // is computed, not clamped or rejected
        let result = commercial_discount(1000.0, 150.0, 360);
        assert_abs_diff_eq!(result.discount, 1500.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result.present_value, -500.0, epsilon = 1e-10);
    }
}
