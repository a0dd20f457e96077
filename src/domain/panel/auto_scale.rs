//! Ceiling computation for panels without a fixed maximum.

/// Ceiling a dynamic panel starts with when no override is configured.
pub const FALLBACK_MAX_VALUE: f64 = 100.0;

/// Smallest ceiling of the form `base · 10^k` (k ≥ 0) strictly above `value`.
///
/// # Algorithm
/// `adjusted = max(value + 1, base)`, `k = ceil(log10(adjusted / base))`.
///
/// # Edge Cases
/// - Values below `base` snap to `base`
/// - NaN and infinities snap to `base`
/// - Above 2^53 `value + 1` rounds back to `value`; the exponent is then
///   stepped up until the ceiling is strictly above `value`
pub fn compute_next_max_value(value: f64, base: f64) -> f64 {
    if !value.is_finite() {
        return base;
    }

    let adjusted = f64::max(value + 1.0, base);
    let mut exponent = (adjusted / base).log10().ceil() as i32;
    let mut ceiling = base * 10f64.powi(exponent);
    while ceiling <= value {
        exponent += 1;
        ceiling = base * 10f64.powi(exponent);
    }
    ceiling
}
