//! Vertical scrollbar drawn over the right edge of the scroll view

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::theme;

/// Render a vertical scrollbar along the right edge of `area`
///
/// Nothing is drawn when the content fits in the viewport.
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - The scroll view area (scrollbar renders in its last column)
/// * `total_rows` - Rows of laid-out content, header included
/// * `viewport_rows` - Rows visible at once
/// * `scroll_row` - First visible content row (0 = top)
pub fn render_vertical_scrollbar(
    frame: &mut Frame,
    area: Rect,
    total_rows: usize,
    viewport_rows: usize,
    scroll_row: usize,
) {
    if total_rows <= viewport_rows || viewport_rows == 0 {
        return;
    }

    let style = Style::default().fg(theme::scrollbar::DEFAULT);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(style)
        .track_style(style);

    // Ratatui uses max_position = content_length - 1 for thumb positioning,
    // so content_length = max_scroll + 1 lets the thumb reach the bottom.
    let max_scroll = total_rows.saturating_sub(viewport_rows);
    let mut state = ScrollbarState::new(max_scroll + 1)
        .position(scroll_row.min(max_scroll))
        .viewport_content_length(viewport_rows);

    frame.render_stateful_widget(scrollbar, area, &mut state);
}

#[cfg(test)]
#[path = "scrollbar_tests.rs"]
mod scrollbar_tests;
