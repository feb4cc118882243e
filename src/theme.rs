//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render code uses
//! `theme::module::CONSTANT` rather than hardcoding `Color::*` values.
//!
//! Theme: Dusk - warm sunset gradient over a deep space blue surface

use ratatui::style::Color;

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

/// Collapsing header styles
pub mod header {
    use super::*;

    // Built-in gradient image, top to bottom
    pub const GRADIENT_TOP: Color = Color::Rgb(255, 126, 95);
    pub const GRADIENT_BOTTOM: Color = Color::Rgb(74, 48, 109);

    // Text-art images draw their glyphs over the gradient
    pub const ART_FG: Color = palette::ORANGE;

    /// Shown where the translated image no longer covers the region
    pub const EMPTY: Color = palette::BG_DARK;

    /// Dim layer between image and title: constant 40% black
    pub const OVERLAY: Color = palette::BLACK;
    pub const OVERLAY_ALPHA: f64 = 0.4;

    pub const TITLE: Color = palette::WHITE;
}

/// Body content styles
pub mod body {
    use super::*;

    pub const TEXT: Color = palette::TEXT;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const RULE: Color = palette::TEXT_DIM;
}

pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const STATUS: Color = palette::PURPLE;
    pub const WARNING: Color = palette::WARNING;
}

pub mod scrollbar {
    use super::*;

    pub const DEFAULT: Color = palette::CYAN;
}

/// Composite `fg` over `bg` with the given opacity.
///
/// Only RGB colors blend; indexed or named colors snap to whichever side
/// dominates.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |f: u8, b: u8| -> u8 {
                (b as f64 + (f as f64 - b as f64) * alpha).round() as u8
            };
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

/// Linear blend between two colors, `t = 0` giving `from`
pub fn mix(from: Color, to: Color, t: f64) -> Color {
    blend(to, from, t)
}

/// Apply the header's dim overlay to a color
pub fn dim(color: Color) -> Color {
    blend(header::OVERLAY, color, header::OVERLAY_ALPHA)
}
