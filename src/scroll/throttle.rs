use std::time::{Duration, Instant};

/// Minimum interval between reported scroll events
pub const DEFAULT_THROTTLE_MS: u64 = 20;

/// Bounds how often offset changes are reported.
///
/// An offer is emitted straight away when nothing was emitted within the
/// interval. Otherwise it waits in a single pending slot, overwritten by later
/// offers, until `flush` finds the interval has elapsed.
#[derive(Debug)]
pub struct ScrollThrottle {
    interval: Duration,
    /// Timestamp of the last emitted offset
    last_emit: Option<Instant>,
    /// Latest offset held back by the throttle
    pending: Option<f64>,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_THROTTLE_MS))
    }
}

impl ScrollThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_emit: None,
            pending: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn offer(&mut self, offset: f64) -> Option<f64> {
        self.offer_at(offset, Instant::now())
    }

    pub fn offer_at(&mut self, offset: f64, now: Instant) -> Option<f64> {
        if self.interval_elapsed(now) {
            self.last_emit = Some(now);
            self.pending = None;
            Some(offset)
        } else {
            self.pending = Some(offset);
            None
        }
    }

    pub fn flush(&mut self) -> Option<f64> {
        self.flush_at(Instant::now())
    }

    pub fn flush_at(&mut self, now: Instant) -> Option<f64> {
        if self.pending.is_none() || !self.interval_elapsed(now) {
            return None;
        }
        self.last_emit = Some(now);
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn interval_elapsed(&self, now: Instant) -> bool {
        match self.last_emit {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod throttle_tests;
