use crate::content::{ContentElement, wrap_text};

use super::header_config::HeaderConfig;

/// Layout units covered by one terminal row
pub const DEFAULT_UNITS_PER_ROW: f64 = 25.0;

/// Vertical padding around each paragraph, in layout units
const PARAGRAPH_PADDING: f64 = 20.0;
/// Horizontal padding columns around body text
pub(crate) const BODY_PADDING_COLS: u16 = 2;
/// Horizontal padding columns on each side of the title
pub(crate) const TITLE_PADDING_COLS: u16 = 3;

/// Converts layout units to terminal rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowMetrics {
    units_per_row: f64,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            units_per_row: DEFAULT_UNITS_PER_ROW,
        }
    }
}

impl RowMetrics {
    /// Non-positive or non-finite scales fall back to the default
    pub fn new(units_per_row: f64) -> Self {
        if units_per_row.is_finite() && units_per_row > 0.0 {
            Self { units_per_row }
        } else {
            Self::default()
        }
    }

    pub fn units_per_row(&self) -> f64 {
        self.units_per_row
    }

    /// Nearest whole row count for a non-negative distance
    pub fn rows(&self, units: f64) -> u16 {
        self.signed_rows(units).clamp(0, u16::MAX as i32) as u16
    }

    /// Nearest whole row count, keeping the sign
    pub fn signed_rows(&self, units: f64) -> i32 {
        let rows = (units / self.units_per_row).round();
        if rows.is_nan() {
            0
        } else {
            rows.clamp(i32::MIN as f64, i32::MAX as f64) as i32
        }
    }

    pub fn units(&self, rows: usize) -> f64 {
        rows as f64 * self.units_per_row
    }

    /// First content row visible at a scroll offset
    pub fn scroll_row(&self, offset: f64) -> usize {
        let row = (offset / self.units_per_row).floor();
        if row.is_nan() || row <= 0.0 {
            0
        } else {
            row as usize
        }
    }
}

/// One row of body content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    Blank,
    Text(String),
    Rule,
}

/// Row-level layout of the whole scrollable content for one width
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayout {
    pub header_rows: u16,
    pub title_lines: Vec<String>,
    pub body: Vec<BodyLine>,
}

impl ContentLayout {
    pub fn compute(
        config: &HeaderConfig,
        children: &[ContentElement],
        metrics: RowMetrics,
        width: u16,
    ) -> Self {
        let title_width = width.saturating_sub(TITLE_PADDING_COLS * 2).max(1) as usize;
        let body_width = width.saturating_sub(BODY_PADDING_COLS * 2).max(1) as usize;
        let padding_rows = metrics.rows(PARAGRAPH_PADDING) as usize;

        let mut body = Vec::new();
        for child in children {
            match child {
                ContentElement::Paragraph(text) => {
                    body.extend(std::iter::repeat_n(BodyLine::Blank, padding_rows));
                    body.extend(wrap_text(text, body_width).into_iter().map(BodyLine::Text));
                    body.extend(std::iter::repeat_n(BodyLine::Blank, padding_rows));
                }
                ContentElement::Divider => body.push(BodyLine::Rule),
            }
        }

        Self {
            header_rows: metrics.rows(config.height),
            title_lines: wrap_text(&config.title, title_width),
            body,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.header_rows as usize + self.body.len()
    }
}

#[cfg(test)]
#[path = "header_layout_tests.rs"]
mod header_layout_tests;
