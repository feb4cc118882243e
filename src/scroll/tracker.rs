/// Holds the most recent scroll offset reported by the scroll surface
///
/// Values are stored as given; the surface is responsible for clamping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPositionTracker {
    offset: f64,
    updates: u64,
}

impl ScrollPositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> f64 {
        self.offset
    }

    pub fn on_update(&mut self, new_offset: f64) {
        self.offset = new_offset;
        self.updates = self.updates.wrapping_add(1);
    }

    /// Number of updates received since creation
    pub fn update_count(&self) -> u64 {
        self.updates
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tracker_tests;
