//! Resize debounce state machine
//!
//! Pure timing logic that can be tested without a UI event loop. The host
//! schedules a wake-up at the deadline returned by [`ResizeDebounce::arm`]
//! and calls [`ResizeDebounce::fire`] when it elapses.

use std::time::{Duration, Instant};

/// Debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No commit pending
    Idle,
    /// A commit is due at `deadline` unless another resize re-arms it
    PendingSync { deadline: Instant },
}

/// Coalesces bursts of resize events into a single commit
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    delay: Duration,
    state: DebounceState,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::PendingSync { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            DebounceState::PendingSync { deadline } => Some(deadline),
            DebounceState::Idle => None,
        }
    }

    /// Arm the timer, replacing any pending deadline
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        self.state = DebounceState::PendingSync { deadline };
        deadline
    }

    /// Returns `true` exactly once per quiet period, when the deadline has passed
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.state {
            DebounceState::PendingSync { deadline } if now >= deadline => {
                self.state = DebounceState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending commit. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DebounceState::Idle;
        was_pending
    }
}
