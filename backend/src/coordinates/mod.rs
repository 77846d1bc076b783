//! Sky coordinate parsing and formatting.
//!
//! Coordinates are always handled in degrees. The search box accepts either
//! decimal degrees (`"187.5 -45.0"`) or sexagesimal notation
//! (`"12:30:00 -45:00:00"`); anything else is reported as `None` so the caller
//! can fall back to name resolution.

mod format;
mod parse;

pub use format::{format_coordinate, to_dms, to_hms, DEFAULT_COORDINATE_DECIMALS};
pub use parse::{parse_coordinates, parse_dms, parse_hms};

use serde::{Deserialize, Serialize};

/// Map `-0.0` to `0.0` so it never prints as `"-0"`.
pub(crate) fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// A right ascension / declination pair, both in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub ra: f64,
    pub dec: f64,
}

impl Coordinates {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Whether the pair lies inside `0 ≤ ra ≤ 360` and `-90 ≤ dec ≤ 90`.
    pub fn is_in_range(&self) -> bool {
        (0.0..=360.0).contains(&self.ra) && (-90.0..=90.0).contains(&self.dec)
    }

    /// Right ascension rendered as `"{h}h {m}m {s}s"`.
    pub fn ra_hms(&self) -> String {
        to_hms(self.ra)
    }

    /// Declination rendered as `"{sign}{d}° {m}′ {s}″"`.
    pub fn dec_dms(&self) -> String {
        to_dms(self.dec)
    }
}

#[cfg(test)]
#[path = "coordinates_tests.rs"]
mod tests;
