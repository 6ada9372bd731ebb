//! Single-slot deferred navigation.
//!
//! After an answer is recorded the view needs a moment for its exit
//! transition before the next question swaps in. The move is parked here and
//! applied once the delay has passed. Scheduling again overwrites the parked
//! target, so at most one move is ever pending.

use std::time::{Duration, Instant};

/// A parked move to `target`, due at `due`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMove {
    pub target: usize,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct SettleSlot {
    delay: Duration,
    pending: Option<PendingMove>,
}

impl SettleSlot {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Park a move to `target`, replacing whatever was parked before.
    pub fn schedule(&mut self, target: usize, now: Instant) -> Option<PendingMove> {
        self.pending.replace(PendingMove {
            target,
            due: now + self.delay,
        })
    }

    /// The parked target, if any.
    pub fn pending(&self) -> Option<usize> {
        self.pending.map(|pending| pending.target)
    }

    /// Take the parked target if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        match self.pending {
            Some(pending) if now >= pending.due => self.take(),
            _ => None,
        }
    }

    /// Take the parked target regardless of its due time.
    pub fn take(&mut self) -> Option<usize> {
        self.pending.take().map(|pending| pending.target)
    }

    /// Drop the parked move without applying it.
    pub fn cancel(&mut self) -> Option<usize> {
        self.take()
    }
}
