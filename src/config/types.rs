// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::header::{DEFAULT_HEADER_HEIGHT, DEFAULT_TITLE, DEFAULT_UNITS_PER_ROW};
use crate::interpolation::{CurveError, Easing, InterpolationCurve};
use crate::scroll::DEFAULT_THROTTLE_MS;

const DEFAULT_WHEEL_ROWS: u16 = 3;

/// Header section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeaderSection {
    #[serde(default = "default_title")]
    pub title: String,
    /// Header height in layout units
    #[serde(default = "default_height")]
    pub height: f64,
    /// Optional text-art file drawn as the header image
    #[serde(default)]
    pub image: Option<PathBuf>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_height() -> f64 {
    DEFAULT_HEADER_HEIGHT
}

impl Default for HeaderSection {
    fn default() -> Self {
        HeaderSection {
            title: default_title(),
            height: default_height(),
            image: None,
        }
    }
}

/// Scroll section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollSection {
    /// Minimum interval between reported scroll events
    #[serde(default = "default_throttle_ms")]
    pub throttle_ms: u64,
    /// Layout units covered by one terminal row
    #[serde(default = "default_units_per_row")]
    pub units_per_row: f64,
    /// Rows scrolled per mouse wheel notch
    #[serde(default = "default_wheel_rows")]
    pub wheel_rows: u16,
}

fn default_throttle_ms() -> u64 {
    DEFAULT_THROTTLE_MS
}

fn default_units_per_row() -> f64 {
    DEFAULT_UNITS_PER_ROW
}

fn default_wheel_rows() -> u16 {
    DEFAULT_WHEEL_ROWS
}

impl Default for ScrollSection {
    fn default() -> Self {
        ScrollSection {
            throttle_ms: default_throttle_ms(),
            units_per_row: default_units_per_row(),
            wheel_rows: default_wheel_rows(),
        }
    }
}

/// Breakpoints for one interpolation curve.
///
/// Missing lists deserialize as empty so that they surface as curve errors
/// rather than parse errors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurveConfig {
    #[serde(default)]
    pub input: Vec<f64>,
    #[serde(default)]
    pub output: Vec<f64>,
    #[serde(default)]
    pub easing: Easing,
}

impl CurveConfig {
    pub fn build(&self) -> Result<InterpolationCurve, CurveError> {
        Ok(
            InterpolationCurve::new(self.input.clone(), self.output.clone())?
                .with_easing(self.easing),
        )
    }
}

/// Animation section: optional overrides of the height-derived curves
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnimationSection {
    #[serde(default)]
    pub translation: Option<CurveConfig>,
    #[serde(default)]
    pub title_opacity: Option<CurveConfig>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderSection,
    #[serde(default)]
    pub scroll: ScrollSection,
    #[serde(default)]
    pub animation: AnimationSection,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
