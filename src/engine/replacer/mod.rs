//! Replacement policy implementations (replacers).
//!
//! - [`FifoReplacer`] - evict in load order
//! - [`LruReplacer`] - evict the least recently used page
//! - [`OptimalReplacer`] - evict the page needed farthest in the future
//!
//! The engine never talks to these directly; it goes through [`Replacer`],
//! the single place a [`Policy`] is turned into behavior.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::common::{FrameId, PageId};
use crate::engine::{FrameSet, Policy};

/// The replacer for one simulation run.
#[derive(Debug, Clone)]
pub enum Replacer {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    Optimal(OptimalReplacer),
}

impl Replacer {
    /// Create the replacer for `policy`.
    pub fn new(policy: Policy, capacity: usize) -> Self {
        match policy {
            Policy::Fifo => Replacer::Fifo(FifoReplacer::new(capacity)),
            Policy::Lru => Replacer::Lru(LruReplacer::new(capacity)),
            Policy::Optimal => Replacer::Optimal(OptimalReplacer::new()),
        }
    }

    /// Record a hit on a resident page.
    pub fn record_access(&mut self, page_id: PageId) {
        match self {
            Replacer::Fifo(r) => r.record_access(page_id),
            Replacer::Lru(r) => r.record_access(page_id),
            Replacer::Optimal(_) => {}
        }
    }

    /// Record that `page_id` was just loaded into a slot.
    pub fn record_load(&mut self, page_id: PageId) {
        match self {
            Replacer::Fifo(r) => r.record_load(page_id),
            Replacer::Lru(r) => r.record_load(page_id),
            Replacer::Optimal(_) => {}
        }
    }

    /// Choose the slot to overwrite in a full frame set.
    ///
    /// `future` is the remainder of the reference string after the faulting
    /// reference; only the optimal policy reads it.
    ///
    /// # Panics
    /// Panics if `frames` is empty, or if a FIFO/LRU replacer is tracking a
    /// page that is not resident. Neither can happen when the replacer is
    /// driven by [`run`](crate::engine::run).
    pub fn victim(&mut self, frames: &FrameSet, future: &[PageId]) -> FrameId {
        let slot = match self {
            Replacer::Fifo(r) => r.evict().and_then(|page_id| frames.find(page_id)),
            Replacer::Lru(r) => r.evict().and_then(|page_id| frames.find(page_id)),
            Replacer::Optimal(r) => r.victim(frames, future),
        };
        slot.expect("replacer must track exactly the resident pages")
    }
}
