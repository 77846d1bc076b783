//! Computations behind the search and object pages.
//!
//! These sit between the pure coordinate utilities and the HTTP layer: chart
//! axis ranges and the "coordinates or object name" target lookup.

pub mod axis_bounds;
pub mod target;

pub use axis_bounds::{calculate_axis_bounds, Bounds, DEFAULT_MIN_PADDING, DEFAULT_PADDING_PERCENT};
pub use target::{locate_target, Target};
