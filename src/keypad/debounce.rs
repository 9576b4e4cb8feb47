//! Timestamp-based debounce gate.

use std::time::{Duration, Instant};

/// Default interval between two accepted key events.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Admits at most one event per interval.
///
/// The caller supplies the current time, so checking never blocks and the
/// gate can be driven by a fake clock in tests.
#[derive(Clone, Debug)]
pub struct Debouncer {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether an event may pass at `now`.
    pub fn ready(&self, now: Instant) -> bool {
        self.last_accepted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }

    /// Accept an event at `now` if the interval has elapsed.
    pub fn admit(&mut self, now: Instant) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }
}
