use super::unsigned_zero;

/// Decimal places used when displaying coordinates in degrees.
pub const DEFAULT_COORDINATE_DECIMALS: usize = 6;

/// Split a non-negative fraction of a unit into whole minutes and seconds.
fn minutes_seconds(fraction: f64) -> (f64, f64) {
    let minutes = (fraction * 60.0).floor();
    let seconds = (fraction * 60.0 - minutes) * 60.0;
    (minutes, seconds)
}

/// Render right ascension (degrees) as `"12h 30m 45.67s"`.
///
/// The input is not wrapped into `[0, 360)`; a negative RA gives negative
/// hour and minute fields. Non-finite input is returned as-is (`"NaN"`,
/// `"inf"`).
pub fn to_hms(ra: f64) -> String {
    if !ra.is_finite() {
        return ra.to_string();
    }

    let hours = ra / 15.0;
    let h = unsigned_zero(hours.floor());
    let (m, s) = minutes_seconds(hours - h);
    format!("{}h {}m {:.2}s", h, m, s)
}

/// Render declination (degrees) as `"+45° 30′ 15.00″"`.
///
/// Non-finite input is returned as-is.
pub fn to_dms(dec: f64) -> String {
    if !dec.is_finite() {
        return dec.to_string();
    }

    let sign = if dec >= 0.0 { "+" } else { "-" };
    let abs_dec = dec.abs();
    let d = abs_dec.floor();
    let (m, s) = minutes_seconds(abs_dec - d);
    format!("{}{}° {}′ {:.2}″", sign, d, m, s)
}

/// Fixed-point rendering with `decimals` places.
///
/// Rounding follows `core::fmt`: the exact binary value is rounded to the
/// nearest decimal, with exact ties going to even.
pub fn format_coordinate(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, unsigned_zero(value))
}
