use std::time::Instant;

use super::throttle::ScrollThrottle;

/// Offset change reported by the scroll surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub offset: f64,
}

/// Scrollable region holding the raw offset in layout units.
///
/// Offsets are kept within `[0, content_height - viewport_height]`: there is no
/// overscroll at the top and flings stop at the end of the content.
#[derive(Debug)]
pub struct ScrollSurface {
    offset: f64,
    content_height: f64,
    viewport_height: f64,
    throttle: ScrollThrottle,
}

impl Default for ScrollSurface {
    fn default() -> Self {
        Self::new(ScrollThrottle::default())
    }
}

impl ScrollSurface {
    pub fn new(throttle: ScrollThrottle) -> Self {
        Self {
            offset: 0.0,
            content_height: 0.0,
            viewport_height: 0.0,
            throttle,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn throttle(&self) -> &ScrollThrottle {
        &self.throttle
    }

    pub fn update_bounds(
        &mut self,
        content_height: f64,
        viewport_height: f64,
    ) -> Option<ScrollEvent> {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);

        // Content may have shrunk under the current offset
        let offset = self.offset;
        self.move_to(offset, Instant::now())
    }

    pub fn scroll_by(&mut self, delta: f64) -> Option<ScrollEvent> {
        self.scroll_by_at(delta, Instant::now())
    }

    pub fn scroll_by_at(&mut self, delta: f64, now: Instant) -> Option<ScrollEvent> {
        let target = self.offset + delta;
        self.move_to(target, now)
    }

    pub fn scroll_to(&mut self, offset: f64) -> Option<ScrollEvent> {
        self.move_to(offset, Instant::now())
    }

    pub fn page_down(&mut self) -> Option<ScrollEvent> {
        let half_page = self.viewport_height / 2.0;
        self.scroll_by(half_page)
    }

    pub fn page_up(&mut self) -> Option<ScrollEvent> {
        let half_page = self.viewport_height / 2.0;
        self.scroll_by(-half_page)
    }

    pub fn jump_to_top(&mut self) -> Option<ScrollEvent> {
        self.scroll_to(0.0)
    }

    pub fn jump_to_bottom(&mut self) -> Option<ScrollEvent> {
        let max = self.max_offset();
        self.scroll_to(max)
    }

    /// Report an offset held back by the throttle once its interval is up
    pub fn poll(&mut self) -> Option<ScrollEvent> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<ScrollEvent> {
        self.throttle
            .flush_at(now)
            .map(|offset| ScrollEvent { offset })
    }

    pub fn has_pending(&self) -> bool {
        self.throttle.has_pending()
    }

    fn move_to(&mut self, target: f64, now: Instant) -> Option<ScrollEvent> {
        if target.is_nan() {
            return None;
        }

        let clamped = target.clamp(0.0, self.max_offset());
        if clamped == self.offset {
            return None;
        }

        self.offset = clamped;
        self.throttle
            .offer_at(clamped, now)
            .map(|offset| ScrollEvent { offset })
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod surface_tests;
