//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;

/// Evicts pages in the order they were loaded.
///
/// Hits never reorder the queue, which is what makes FIFO subject to
/// Belady's anomaly.
#[derive(Debug, Clone, Default)]
pub struct FifoReplacer {
    /// Resident pages in load order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer with room for `resident_bound` pages.
    ///
    /// Only a reservation; the queue still grows past it if needed.
    pub fn new(resident_bound: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(resident_bound),
        }
    }

    /// Record a hit. FIFO ignores it.
    #[inline]
    pub fn record_access(&mut self, _page_id: PageId) {}

    /// Record that `page_id` was just loaded.
    pub fn record_load(&mut self, page_id: PageId) {
        self.queue.push_back(page_id);
    }

    /// Select and forget the oldest loaded page.
    ///
    /// Returns None if nothing has been loaded.
    pub fn evict(&mut self) -> Option<PageId> {
        self.queue.pop_front()
    }

    /// Number of tracked pages.
    #[cfg(test)]
    fn size(&self) -> usize {
        self.queue.len()
    }
}
