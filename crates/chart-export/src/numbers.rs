//! Number formatting helpers shared by charts and templates.

/// Round to `precision` decimal places, halves away from zero.
pub fn to_fixed_point(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round() / factor
}
