// SPDX-License-Identifier: MPL-2.0
//! The host session: one document, its pending timers and the clock.
//!
//! A session lives as long as the window (or test) that owns it. Everything
//! the toast widget mutates goes through it.

use crate::dom::{Document, ElementId};
use crate::timer::Scheduler;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct Session {
    pub document: Document,
    /// Pending auto-hide timers, keyed by the toast element they hide.
    pub timers: Scheduler<ElementId>,
    now: Instant,
}

impl Default for Session {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            document: Document::new(),
            timers: Scheduler::new(),
            now,
        }
    }

    /// The clock value timers are scheduled against.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }
}
