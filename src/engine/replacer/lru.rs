//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;

/// Evicts the page whose last reference is oldest.
///
/// Keeps a recency queue separate from the frame slots: the front is the
/// least recently used page, the back the most recent. Both loads and hits
/// move a page to the back.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    recency: VecDeque<PageId>,
}

impl LruReplacer {
    /// Create a new LRU replacer with room for `resident_bound` pages.
    ///
    /// Only a reservation; the queue still grows past it if needed.
    pub fn new(resident_bound: usize) -> Self {
        Self {
            recency: VecDeque::with_capacity(resident_bound),
        }
    }

    /// Mark `page_id` as most recently used.
    ///
    /// Linear in the number of resident pages, which is bounded by capacity.
    pub fn record_access(&mut self, page_id: PageId) {
        if let Some(pos) = self.recency.iter().position(|&p| p == page_id) {
            self.recency.remove(pos);
        }
        self.recency.push_back(page_id);
    }

    /// Record that `page_id` was just loaded.
    pub fn record_load(&mut self, page_id: PageId) {
        self.recency.push_back(page_id);
    }

    /// Select and forget the least recently used page.
    pub fn evict(&mut self) -> Option<PageId> {
        self.recency.pop_front()
    }

    /// Number of tracked pages.
    #[cfg(test)]
    fn size(&self) -> usize {
        self.recency.len()
    }
}
