use qtty::{Degree, HourAngles};

use super::{unsigned_zero, Coordinates};

/// Parse a strict decimal number. The whole token must be numeric and the
/// value finite.
fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite()).map(unsigned_zero)
}

/// Split a `a:b:c` triple into three finite numbers.
fn parse_triple(text: &str) -> Option<(f64, f64, f64)> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let first = parse_number(parts[0])?;
    let minutes = parse_number(parts[1])?;
    let seconds = parse_number(parts[2])?;
    Some((first, minutes, seconds))
}

/// Parse `HH:MM:SS[.ss]` right ascension into degrees.
///
/// Components are not range checked: `"25:00:00"` yields `375.0`.
pub fn parse_hms(hms: &str) -> Option<f64> {
    let (hours, minutes, seconds) = parse_triple(hms)?;
    let hour_angle = HourAngles::new(hours + minutes / 60.0 + seconds / 3600.0);
    Some(hour_angle.to::<Degree>().value())
}

/// Parse `[+-]DD:MM:SS[.ss]` declination into degrees.
///
/// The sign applies to the whole value, so `"-00:30:00"` is `-0.5`.
pub fn parse_dms(dms: &str) -> Option<f64> {
    let clean = dms.trim();
    let (sign, rest) = if let Some(rest) = clean.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = clean.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, clean)
    };

    let (degrees, minutes, seconds) = parse_triple(rest)?;
    Some(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

/// Try to read free text as an RA/Dec pair.
///
/// Accepts sexagesimal (`"12:30:00 -45:00:00"`) or decimal degrees
/// (`"187.5, -45.0"`). Returns `None` when the text is not a coordinate pair,
/// which callers treat as "resolve it as an object name instead".
///
/// Decimal input is range checked; sexagesimal input is not.
pub fn parse_coordinates(input: &str) -> Option<Coordinates> {
    let tokens: Vec<&str> = input
        .trim()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() < 2 {
        return None;
    }

    let ra_part = tokens[0];
    let dec_part = tokens[1..].join(" ");

    if ra_part.contains(':') || dec_part.contains(':') {
        if let (Some(ra), Some(dec)) = (parse_hms(ra_part), parse_dms(&dec_part)) {
            return Some(Coordinates::new(ra, dec));
        }
    }

    let ra = parse_number(ra_part)?;
    let dec = parse_number(&dec_part)?;
    let coords = Coordinates::new(ra, dec);
    coords.is_in_range().then_some(coords)
}
