// SPDX-License-Identifier: MPL-2.0
//! Counted set of outstanding "keep the overlay visible" demands.

use crate::domain::ui::ActivityId;
use std::collections::BTreeSet;

/// Records who currently needs the overlay to stay on screen.
///
/// Ids come from a monotonically increasing counter, so the first id of a
/// fresh ledger is `0` and ids are never handed out twice.
#[derive(Debug, Default)]
pub struct ActivityLedger {
    next_id: u64,
    outstanding: BTreeSet<ActivityId>,
}

impl ActivityLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new demand and returns its id.
    pub fn acquire(&mut self) -> ActivityId {
        let id = ActivityId::new(self.next_id);
        self.next_id += 1;
        self.outstanding.insert(id);
        id
    }

    /// Retires a demand.
    ///
    /// Unknown or already retired ids are ignored; returns whether `id`
    /// was outstanding.
    pub fn release(&mut self, id: ActivityId) -> bool {
        self.outstanding.remove(&id)
    }

    /// Returns true when nothing demands the overlay.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Number of outstanding demands.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding.len()
    }

}
