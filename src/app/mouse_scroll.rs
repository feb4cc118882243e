//! Mouse wheel scrolling

use super::app_state::App;

/// Scroll direction for mouse wheel events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Scroll the surface by the configured rows per wheel notch
pub fn handle_scroll(app: &mut App, direction: ScrollDirection) {
    let distance = app.row_units() * app.wheel_rows as f64;
    let event = match direction {
        ScrollDirection::Up => app.surface.scroll_by(-distance),
        ScrollDirection::Down => app.surface.scroll_by(distance),
    };
    app.apply_scroll(event);
}

#[cfg(test)]
#[path = "mouse_scroll_tests.rs"]
mod mouse_scroll_tests;
