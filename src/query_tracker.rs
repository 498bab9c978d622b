//! Sequencing for in-flight chat queries.
//!
//! Every submitted question gets a number from one monotonic counter.  A
//! response is applied only when its number is newer than the last response
//! applied for the same database, so a slow early answer can never land after
//! a later one.  `clear()` (logout) moves a floor up to the counter, which
//! turns every response still in flight into a stale one.

use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct QueryTracker {
    next_seq: u64,
    floor: u64,
    last_applied: HashMap<String, u64>,
    pending: HashMap<String, usize>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new query for `database` and return its sequence number.
    pub fn issue(&mut self, database: &str) -> u64 {
        self.next_seq += 1;
        *self.pending.entry(database.to_string()).or_insert(0) += 1;
        self.next_seq
    }

    /// Record a response.  Returns `true` when it should be applied.
    pub fn complete(&mut self, database: &str, seq: u64) -> bool {
        if seq <= self.floor {
            return false;
        }

        if let Some(count) = self.pending.get_mut(database) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.pending.remove(database);
            }
        }

        let last = self.last_applied.entry(database.to_string()).or_insert(0);
        if seq > *last {
            *last = seq;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self, database: &str) -> bool {
        self.pending.get(database).is_some_and(|n| *n > 0)
    }

    /// Drop all bookkeeping and invalidate everything still in flight.
    pub fn clear(&mut self) {
        self.floor = self.next_seq;
        self.last_applied.clear();
        self.pending.clear();
    }
}
