//! Optimal (Belady / MIN) replacement policy.
//!
//! Needs the future of the reference string, so it only exists in a
//! simulator. It serves as the lower bound the other policies are measured
//! against.

use crate::common::{FrameId, PageId};
use crate::engine::FrameSet;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// Stateless: every decision is made from the frame set and the remaining
/// references alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new optimal replacer.
    pub fn new() -> Self {
        Self
    }

    /// Choose the slot to overwrite.
    ///
    /// `future` is the not-yet-processed suffix of the reference string,
    /// excluding the reference currently faulting.
    ///
    /// Slots are scanned left to right. The first page that never occurs in
    /// `future` is chosen at once and later slots are not examined. If every
    /// page recurs, the one with the largest next-use index wins, and the
    /// leftmost slot wins a tie.
    ///
    /// Returns None only for an empty frame set.
    pub fn victim(&self, frames: &FrameSet, future: &[PageId]) -> Option<FrameId> {
        let mut victim = None;
        let mut farthest = 0;

        for (frame_id, page_id) in frames.iter() {
            match next_use(page_id, future) {
                None => return Some(frame_id),
                Some(distance) => {
                    if victim.is_none() || distance > farthest {
                        farthest = distance;
                        victim = Some(frame_id);
                    }
                }
            }
        }

        victim
    }
}

/// Index of the first occurrence of `page_id` in `future`.
#[inline]
fn next_use(page_id: PageId, future: &[PageId]) -> Option<usize> {
    future.iter().position(|&p| p == page_id)
}
