use crate::config::AnimationSection;
use crate::interpolation::{CurveError, InterpolationCurve, interpolate};

use super::header_config::DEFAULT_HEADER_HEIGHT;

// Title fade breakpoints for the default 250-unit header
const FADE_SLOW_END: f64 = 120.0;
const FADE_END: f64 = 150.0;
const FADE_SLOW_OPACITY: f64 = 0.9;

/// Visual properties derived from one scroll offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame {
    pub scroll_offset: f64,
    pub header_translate_y: f64,
    pub title_translate_y: f64,
    pub title_opacity: f64,
}

impl HeaderFrame {
    pub fn title_visible(&self) -> bool {
        self.title_opacity > 0.0
    }
}

/// The two curves driving the header: image/title translation and title
/// opacity. Both read the same scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderAnimation {
    translation: InterpolationCurve,
    title_opacity: InterpolationCurve,
}

impl HeaderAnimation {
    pub fn new(translation: InterpolationCurve, title_opacity: InterpolationCurve) -> Self {
        Self {
            translation,
            title_opacity,
        }
    }

    /// Default curves scaled to the header height: the image moves at half
    /// speed across the header, the title is gone by 60% of it.
    pub fn for_height(height: f64) -> Result<Self, CurveError> {
        let translation = InterpolationCurve::new(vec![0.0, height], vec![0.0, height / 2.0])?;
        let title_opacity = InterpolationCurve::new(
            vec![
                0.0,
                height * FADE_SLOW_END / DEFAULT_HEADER_HEIGHT,
                height * FADE_END / DEFAULT_HEADER_HEIGHT,
            ],
            vec![1.0, FADE_SLOW_OPACITY, 0.0],
        )?;
        Ok(Self::new(translation, title_opacity))
    }

    /// Height-scaled defaults with any configured curve overrides applied
    pub fn from_config(height: f64, section: &AnimationSection) -> Result<Self, CurveError> {
        let defaults = Self::for_height(height)?;

        let translation = match &section.translation {
            Some(curve) => curve.build()?,
            None => defaults.translation,
        };
        let title_opacity = match &section.title_opacity {
            Some(curve) => curve.build()?,
            None => defaults.title_opacity,
        };

        Ok(Self::new(translation, title_opacity))
    }

    pub fn translation(&self) -> &InterpolationCurve {
        &self.translation
    }

    pub fn title_opacity(&self) -> &InterpolationCurve {
        &self.title_opacity
    }

    pub fn frame_at(&self, offset: f64) -> HeaderFrame {
        let translate = interpolate(&self.translation, offset);
        HeaderFrame {
            scroll_offset: offset,
            header_translate_y: translate,
            // Title rides along with the image
            title_translate_y: translate,
            title_opacity: interpolate(&self.title_opacity, offset),
        }
    }
}

#[cfg(test)]
#[path = "header_animation_tests.rs"]
mod header_animation_tests;
