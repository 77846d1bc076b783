//! Axis range computation for charts (light curves, sky plots).

use serde::{Deserialize, Serialize};

/// Fraction of the data range added on each side by default.
pub const DEFAULT_PADDING_PERCENT: f64 = 0.1;

/// Padding used when the data range is zero.
pub const DEFAULT_MIN_PADDING: f64 = 0.001;

/// A padded display range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Bounds used when there is nothing to plot.
    pub const PLACEHOLDER: Bounds = Bounds { min: 0.0, max: 1.0 };

    /// Padded bounds with the default padding settings.
    pub fn from_values(values: &[f64]) -> Self {
        calculate_axis_bounds(values, DEFAULT_PADDING_PERCENT, DEFAULT_MIN_PADDING)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute `[min - pad, max + pad]` over `values`.
///
/// `pad` is `range * padding_percent`, or `min_padding` when that product is
/// zero (all samples equal). NaN and infinite samples are ignored; with no
/// finite samples left the result is [`Bounds::PLACEHOLDER`].
pub fn calculate_axis_bounds(values: &[f64], padding_percent: f64, min_padding: f64) -> Bounds {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return Bounds::PLACEHOLDER;
    }

    let range = max - min;
    let mut padding = range * padding_percent;
    if padding == 0.0 || padding.is_nan() {
        padding = min_padding;
    }

    Bounds {
        min: min - padding,
        max: max + padding,
    }
}
