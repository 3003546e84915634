/// Round `value` to the given number of decimal places.
///
/// Halfway cases round away from zero. Non-finite values pass through unchanged,
/// which keeps the "cannot climb" infinity intact.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Convert degrees Fahrenheit to degrees Celsius
#[inline]
pub fn fahrenheit_to_celsius(deg_f: f64) -> f64 {
    (deg_f - 32.0) * 5.0 / 9.0
}
