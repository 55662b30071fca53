// SPDX-License-Identifier: MPL-2.0
//! Single-shot auto-hide timer.
//!
//! Arming hands out a [`HideTicket`] stamped with a fresh generation. Only the
//! ticket of the latest arming can fire; anything queued before a cancel or a
//! re-arm is recognized as stale and dropped.

use crate::domain::ui::Generation;
use std::time::{Duration, Instant};

/// Proof that a particular arming of the timer is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    generation: Generation,
    deadline: Instant,
}

impl HideTicket {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[derive(Debug, Default)]
pub struct HideTimer {
    generation: Generation,
    pending: Option<HideTicket>,
}

impl HideTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending hide and schedules a new one `delay` after `now`.
    pub fn arm(&mut self, now: Instant, delay: Duration) -> HideTicket {
        self.generation = self.generation.next();
        let ticket = HideTicket {
            generation: self.generation,
            deadline: now + delay,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Clears the pending hide, if any.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.generation = self.generation.next();
        }
    }

    /// Returns the pending ticket if its deadline has passed.
    #[must_use]
    pub fn poll(&self, now: Instant) -> Option<HideTicket> {
        self.pending.filter(|ticket| now >= ticket.deadline)
    }

    /// Consumes the pending hide if `ticket` is still current.
    pub fn fire(&mut self, ticket: HideTicket) -> bool {
        if self.pending != Some(ticket) {
            tracing::trace!(generation = ticket.generation.value(), "stale hide ticket");
            return false;
        }
        self.pending = None;
        true
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|ticket| ticket.deadline)
    }
}
