//! Interpolation curves
//!
//! Piecewise-linear mappings from a scroll offset domain to a visual property
//! range. Curves are validated at construction and clamp outside their domain,
//! so every output stays within the declared output breakpoints.

mod curve;
mod easing;

pub use curve::{CurveError, InterpolationCurve, interpolate};
pub use easing::Easing;
