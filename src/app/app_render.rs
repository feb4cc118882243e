use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::app_state::App;
use crate::help::help_line_render;
use crate::widgets::scrollbar::render_vertical_scrollbar;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(frame.area());
        let (viewport, help_area) = (layout[0], layout[1]);

        self.sync_bounds(viewport);

        frame.render_widget(&self.view, viewport);

        let metrics = self.view.metrics();
        render_vertical_scrollbar(
            frame,
            viewport,
            self.view.content_rows(viewport.width),
            viewport.height as usize,
            metrics.scroll_row(self.view.frame().scroll_offset),
        );

        help_line_render::render_line(self, frame, help_area);
    }

    /// Size the scroll surface to the content laid out for this viewport
    pub fn sync_bounds(&mut self, viewport: Rect) {
        let metrics = self.view.metrics();
        let content_height = self.view.content_height(viewport.width);
        let viewport_height = metrics.units(viewport.height as usize);

        let event = self.surface.update_bounds(content_height, viewport_height);
        self.apply_scroll(event);
    }
}
