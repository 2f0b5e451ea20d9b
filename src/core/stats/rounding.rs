// ============================================================================
// Decimal rounding
// ============================================================================

/// Round `value` to `places` decimal digits, half away from zero.
///
/// Non-finite input is returned unchanged.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid handing out negative zero
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Shorthand for prices and percentages
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Percentage change from `previous` to `current`; zero when `previous` is zero
pub fn pct_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
