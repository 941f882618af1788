#![forbid(unsafe_code)]

//! Single-slot cancellable debounce deadline.
//!
//! The path-hover exit is debounced so the pointer can cross the visual gap
//! between adjacent curve segments without the tooltip flickering. The
//! timer holds at most one pending deadline: arming while armed replaces
//! the previous deadline, so two timers can never race.
//!
//! Time is supplied by the caller as `Instant`s; the timer never reads a
//! clock itself, which keeps transitions deterministic under test.
//!
//! # Example
//! ```
//! use attnview_runtime::DebounceTimer;
//! use std::time::{Duration, Instant};
//!
//! let mut timer = DebounceTimer::new(Duration::from_millis(50));
//! let t0 = Instant::now();
//! timer.arm(t0);
//! assert!(!timer.fire_due(t0 + Duration::from_millis(49)));
//! assert!(timer.fire_due(t0 + Duration::from_millis(50)));
//! assert!(!timer.is_armed());
//! ```

use std::time::{Duration, Instant};

/// A cancellable fixed-delay deadline with at most one pending instance.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebounceTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending
    /// deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire if the deadline has been reached. Firing disarms the timer.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer() -> (DebounceTimer, Instant) {
        (DebounceTimer::new(Duration::from_millis(50)), Instant::now())
    }

    #[test]
    fn starts_disarmed() {
        let (mut t, now) = timer();
        assert!(!t.is_armed());
        assert!(!t.fire_due(now + Duration::from_secs(10)));
    }

    #[test]
    fn fires_at_deadline_and_disarms() {
        let (mut t, now) = timer();
        t.arm(now);
        assert!(!t.fire_due(now + Duration::from_millis(49)));
        assert!(t.fire_due(now + Duration::from_millis(50)));
        assert!(!t.is_armed());
        assert!(!t.fire_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn cancel_prevents_firing() {
        let (mut t, now) = timer();
        t.arm(now);
        t.cancel();
        assert!(!t.fire_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn rearming_replaces_the_deadline() {
        let (mut t, now) = timer();
        t.arm(now);
        t.arm(now + Duration::from_millis(40));
        // Old deadline (now + 50) must not fire.
        assert!(!t.fire_due(now + Duration::from_millis(60)));
        assert!(t.fire_due(now + Duration::from_millis(90)));
    }
}
