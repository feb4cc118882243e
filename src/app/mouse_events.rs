//! Mouse event dispatcher
//!
//! Only the wheel does anything: the whole screen is one scroll surface.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::App;
use super::mouse_scroll::{self, ScrollDirection};

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => mouse_scroll::handle_scroll(app, ScrollDirection::Down),
        MouseEventKind::ScrollUp => mouse_scroll::handle_scroll(app, ScrollDirection::Up),
        _ => {}
    }
}
