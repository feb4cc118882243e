use std::time::Duration;

use crate::config::Config;
use crate::header::CollapsingHeaderView;
use crate::scroll::{ScrollEvent, ScrollSurface, ScrollThrottle};

pub struct App {
    pub view: CollapsingHeaderView,
    pub surface: ScrollSurface,
    pub wheel_rows: u16,
    pub should_quit: bool,
    pub warning: Option<String>,
    dirty: bool,
}

impl App {
    pub fn new(view: CollapsingHeaderView, config: &Config) -> Self {
        let throttle = ScrollThrottle::new(Duration::from_millis(config.scroll.throttle_ms));

        Self {
            view,
            surface: ScrollSurface::new(throttle),
            wheel_rows: config.scroll.wheel_rows,
            should_quit: false,
            warning: None,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn show_warning(&mut self, message: &str) {
        self.warning = Some(message.to_string());
        self.dirty = true;
    }

    /// Layout units scrolled by one row
    pub fn row_units(&self) -> f64 {
        self.view.metrics().units(1)
    }

    /// Forward a reported offset to the view
    pub fn apply_scroll(&mut self, event: Option<ScrollEvent>) {
        if let Some(event) = event {
            self.view.on_scroll(event);
            self.dirty = true;
        }
    }
}
