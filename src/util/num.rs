/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use shunting_yard::util::num::f64_to_i64_checked;
///
/// assert_eq!(f64_to_i64_checked(6.0, "fractional"), Ok(6));
/// assert_eq!(f64_to_i64_checked(-3.0, "fractional"), Ok(-3));
/// assert_eq!(f64_to_i64_checked(6.5, "fractional"), Err("fractional"));
/// assert_eq!(f64_to_i64_checked(f64::NAN, "fractional"), Err("fractional"));
/// assert_eq!(f64_to_i64_checked(1e20, "fractional"), Err("fractional"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked<E>(value: f64, error: E) -> Result<i64, E> {
    if !value.is_finite() {
        return Err(error);
    }
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(error);
    }
    if value.fract() != 0.0 {
        return Err(error);
    }
    Ok(value as i64)
}

/// Converts an `i64` back to `f64`, rounding magnitudes above `2^53` to the
/// nearest representable number.
///
/// ## Example
/// ```
/// use shunting_yard::util::num::i64_to_f64_rounded;
///
/// assert_eq!(i64_to_f64_rounded(-7), -7.0);
/// assert_eq!(i64_to_f64_rounded((1 << 53) + 1), 9_007_199_254_740_992.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_rounded(value: i64) -> f64 {
    value as f64
}
