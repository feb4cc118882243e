//! parallax library - collapsing parallax header for a terminal scroll view
//!
//! This library exposes the core functionality of parallax for testing purposes.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod header;
pub mod help;
pub mod interpolation;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use header::{CollapsingHeaderView, HeaderAnimation, HeaderConfig};
pub use interpolation::{InterpolationCurve, interpolate};
