//! FrameSet - the resident pages of one simulation.
//!
//! A [`FrameSet`] is a positional array of slots. Slots fill left to right
//! while there is room; after that a fault overwrites the victim's slot in
//! place, so a page never moves while it stays resident.

use serde::Serialize;

use crate::common::{FrameId, PageId};

/// The pages currently resident, indexed by slot.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page appears twice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FrameSet {
    slots: Vec<PageId>,
    #[serde(skip)]
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set that admits up to `capacity` pages.
    ///
    /// Nothing is allocated up front; the slot array only grows as pages
    /// are loaded, so a capacity far beyond the working set costs nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Slot holding `page_id`, or None if it is not resident.
    #[inline]
    pub fn find(&self, page_id: PageId) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|&p| p == page_id)
            .map(FrameId::new)
    }

    /// Whether `page_id` is resident.
    #[inline]
    pub fn contains(&self, page_id: PageId) -> bool {
        self.find(page_id).is_some()
    }

    /// Place `page_id` in the next empty slot.
    ///
    /// # Panics
    /// Panics if the frame set is already full.
    pub fn push(&mut self, page_id: PageId) -> FrameId {
        assert!(!self.is_full(), "push into a full frame set");
        self.slots.push(page_id);
        FrameId::new(self.slots.len() - 1)
    }

    /// Overwrite slot `frame_id` with `page_id`, returning the evicted page.
    pub fn replace(&mut self, frame_id: FrameId, page_id: PageId) -> PageId {
        std::mem::replace(&mut self.slots[frame_id.0], page_id)
    }

    /// Page in slot `frame_id`, if that slot is occupied.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id.0).copied()
    }

    /// Resident pages in slot order.
    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.slots
    }

    /// Iterate `(slot, page)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, PageId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, &p)| (FrameId::new(i), p))
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_set_fills_left_to_right() {
        let mut frames = FrameSet::new(2);
        assert!(frames.is_empty());

        assert_eq!(frames.push(PageId(7)), FrameId::new(0));
        assert_eq!(frames.push(PageId(0)), FrameId::new(1));

        assert!(frames.is_full());
        assert_eq!(frames.as_slice(), &[PageId(7), PageId(0)]);
    }

    #[test]
    fn test_frame_set_replace_keeps_slots() {
        let mut frames = FrameSet::new(3);
        frames.push(PageId(1));
        frames.push(PageId(2));
        frames.push(PageId(3));

        let evicted = frames.replace(FrameId::new(1), PageId(9));

        assert_eq!(evicted, PageId(2));
        assert_eq!(frames.as_slice(), &[PageId(1), PageId(9), PageId(3)]);
        assert_eq!(frames.find(PageId(9)), Some(FrameId::new(1)));
        assert!(!frames.contains(PageId(2)));
    }

    #[test]
    #[should_panic(expected = "full frame set")]
    fn test_frame_set_push_when_full_panics() {
        let mut frames = FrameSet::new(1);
        frames.push(PageId(1));
        frames.push(PageId(2));
    }

    #[test]
    fn test_frame_set_huge_capacity() {
        let mut frames = FrameSet::new(usize::MAX);
        frames.push(PageId(1));

        assert!(!frames.is_full());
        assert_eq!(frames.capacity(), usize::MAX);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_frame_set_serializes_as_list() {
        let mut frames = FrameSet::new(3);
        frames.push(PageId(4));
        frames.push(PageId(-1));
        assert_eq!(serde_json::to_string(&frames).unwrap(), "[4,-1]");
    }
}
