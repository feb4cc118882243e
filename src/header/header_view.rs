use crate::content::ContentElement;
use crate::scroll::{ScrollEvent, ScrollPositionTracker};

use super::header_animation::{HeaderAnimation, HeaderFrame};
use super::header_config::HeaderConfig;
use super::header_layout::{ContentLayout, RowMetrics};

/// Scrollable composite of a collapsing header and the content below it.
///
/// The view subscribes to the surface's scroll events: each event updates the
/// tracker and re-derives the header frame, which the next draw paints.
#[derive(Debug, Clone)]
pub struct CollapsingHeaderView {
    config: HeaderConfig,
    children: Vec<ContentElement>,
    animation: HeaderAnimation,
    metrics: RowMetrics,
    tracker: ScrollPositionTracker,
    frame: HeaderFrame,
}

impl CollapsingHeaderView {
    pub fn new(
        config: HeaderConfig,
        children: Vec<ContentElement>,
        animation: HeaderAnimation,
        metrics: RowMetrics,
    ) -> Self {
        let tracker = ScrollPositionTracker::new();
        let frame = animation.frame_at(tracker.current());
        Self {
            config,
            children,
            animation,
            metrics,
            tracker,
            frame,
        }
    }

    pub fn on_scroll(&mut self, event: ScrollEvent) {
        self.tracker.on_update(event.offset);
        self.frame = self.animation.frame_at(self.tracker.current());

        #[cfg(debug_assertions)]
        log::trace!(
            "scroll {:.1} -> shift {:.1}, title opacity {:.2}",
            self.frame.scroll_offset,
            self.frame.header_translate_y,
            self.frame.title_opacity
        );
    }

    pub fn frame(&self) -> HeaderFrame {
        self.frame
    }

    pub fn tracker(&self) -> &ScrollPositionTracker {
        &self.tracker
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn children(&self) -> &[ContentElement] {
        &self.children
    }

    pub fn animation(&self) -> &HeaderAnimation {
        &self.animation
    }

    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    pub fn layout(&self, width: u16) -> ContentLayout {
        ContentLayout::compute(&self.config, &self.children, self.metrics, width)
    }

    pub fn content_rows(&self, width: u16) -> usize {
        self.layout(width).total_rows()
    }

    /// Total content height in layout units for the given width
    pub fn content_height(&self, width: u16) -> f64 {
        self.metrics.units(self.content_rows(width))
    }
}

#[cfg(test)]
#[path = "header_view_tests.rs"]
mod header_view_tests;
