const TWO_POW_52: f64 = 4_503_599_627_370_496.0;

/// Scale factor `10^precision` used to move the decimal point.
#[inline]
pub fn precision_multiplier(precision: i32) -> f64 {
    libm::pow(10.0, precision as f64)
}

/// Keeps `precision` decimal digits of `x`, dropping the rest.
///
/// This truncates toward zero, it does not round: `1.239` at precision 2 is
/// `1.23` and `-1.239` is `-1.23`. A negative precision truncates to the left
/// of the decimal point (`1234.5` at precision -1 is `1230`).
///
/// `NaN` and infinities pass through unchanged, as do finite values with no
/// digits left to drop at this scale. A precision so negative that
/// `10^precision` underflows to zero truncates everything to a signed zero.
#[inline]
pub fn truncate_to_precision(x: f64, precision: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let multiplier = precision_multiplier(precision);
    if multiplier == 0.0 {
        return libm::copysign(0.0, x);
    }
    if multiplier.is_infinite() {
        return x;
    }
    let scaled = x * multiplier;
    // at or past 2^52 an f64 carries no fractional bits
    if !scaled.is_finite() || scaled.abs() >= TWO_POW_52 {
        return x;
    }
    libm::trunc(scaled) / multiplier
}
