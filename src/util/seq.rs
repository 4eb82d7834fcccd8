//! Latest-intent request sequencing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Independent requests carry no ordering guarantee: a rapid follow/unfollow
//! toggle or two keystrokes in the search box can complete out of order.
//! `RequestSeq` makes the most recent user intent authoritative: responses
//! holding a stale ticket are discarded before they touch state. Requests are
//! never aborted; the guard runs at the apply site.

#[cfg(test)]
#[path = "seq_test.rs"]
mod seq_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket counter shared between an event handler and its
/// in-flight completions. Clones observe the same counter.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    latest: Arc<AtomicU64>,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next ticket. The returned value is current until the next
    /// `begin` call.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` still represents the latest intent.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}
