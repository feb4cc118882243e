//! Scroll plumbing
//!
//! The surface owns the raw offset and clamps it, the throttle bounds how often
//! offset changes are reported, and the tracker holds the last reported value
//! for the header animation to read.

mod surface;
mod throttle;
mod tracker;

pub use surface::{ScrollEvent, ScrollSurface};
pub use throttle::{DEFAULT_THROTTLE_MS, ScrollThrottle};
pub use tracker::ScrollPositionTracker;
