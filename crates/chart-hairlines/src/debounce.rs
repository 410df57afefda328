// File: crates/chart-hairlines/src/debounce.rs
// Summary: Single-slot click debounce; a click arms it, a double-click cancels it, polling fires it.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingCreate {
    x_value: f64,
    deadline: Instant,
}

#[derive(Clone, Debug)]
pub struct ClickDebounce {
    delay: Duration,
    pending: Option<PendingCreate>,
}

impl ClickDebounce {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Start waiting to create at `x_value`. Returns false if a creation is already pending.
    pub fn arm(&mut self, x_value: f64, now: Instant) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingCreate { x_value, deadline: now + self.delay });
        true
    }

    /// Drop the pending creation. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the captured x-value once `now` has reached the deadline.
    pub fn take_due(&mut self, now: Instant) -> Option<f64> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.x_value)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }
}
