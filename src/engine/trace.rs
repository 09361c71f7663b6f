//! Simulation output: the per-step trace and its derived views.

use serde::Serialize;

use crate::common::{FrameId, PageId};
use crate::engine::{Capacity, FrameSet, Policy};

/// One reference, as the engine processed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Step {
    /// Resident pages before this reference was handled.
    pub frame_set_before: FrameSet,

    /// The page referenced.
    pub requested_page: PageId,

    /// Whether the page had to be loaded.
    pub is_fault: bool,

    /// Faults so far, this step included.
    pub cumulative_faults: usize,

    /// Slot holding `requested_page` after this step.
    pub slot: FrameId,

    /// Page overwritten to make room, if any.
    pub evicted: Option<PageId>,
}

/// The full outcome of running one policy over one reference string.
///
/// Immutable once built. Rates are derived on demand from the counters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SimulationResult {
    policy: Policy,
    capacity: usize,
    unique_pages: usize,
    steps: Vec<Step>,
    final_frames: FrameSet,
    total_faults: usize,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: Policy,
        capacity: Capacity,
        unique_pages: usize,
        steps: Vec<Step>,
        final_frames: FrameSet,
    ) -> Self {
        let total_faults = steps.last().map_or(0, |s| s.cumulative_faults);
        Self {
            policy,
            capacity: capacity.get(),
            unique_pages,
            steps,
            final_frames,
            total_faults,
        }
    }

    /// Policy that produced this trace.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Frame capacity of the run.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct pages in the reference string.
    pub fn unique_pages(&self) -> usize {
        self.unique_pages
    }

    /// Steps in reference order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of references processed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a result produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total page faults.
    pub fn total_faults(&self) -> usize {
        self.total_faults
    }

    /// Total hits.
    pub fn total_hits(&self) -> usize {
        self.len() - self.total_faults
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.total_hits() as f64 / self.len() as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.total_faults as f64 / self.len() as f64
        }
    }

    /// Resident pages after the last reference.
    pub fn final_frames(&self) -> &FrameSet {
        &self.final_frames
    }

    /// Cumulative fault count at each position.
    pub fn fault_curve(&self) -> Vec<usize> {
        self.steps.iter().map(|s| s.cumulative_faults).collect()
    }

    /// Frame occupancy before each reference.
    ///
    /// `matrix[slot][position]` is the page in `slot` just before reference
    /// `position` was handled, or None if the slot was still empty. Slots are
    /// never vacated, so there is one row per slot the run ever filled and
    /// slots that stayed empty throughout are left out.
    pub fn occupancy(&self) -> Vec<Vec<Option<PageId>>> {
        (0..self.final_frames.len())
            .map(|slot| {
                self.steps
                    .iter()
                    .map(|s| s.frame_set_before.get(FrameId::new(slot)))
                    .collect()
            })
            .collect()
    }

    /// CRC32 over a canonical encoding of the trace.
    ///
    /// Two results have the same fingerprint when policy, capacity and every
    /// step agree, so it doubles as a cheap determinism check.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();

        hasher.update(self.policy.name().as_bytes());
        hasher.update(&(self.capacity as u64).to_le_bytes());

        for step in &self.steps {
            hasher.update(&step.requested_page.0.to_le_bytes());
            hasher.update(&[step.is_fault as u8]);
            hasher.update(&(step.cumulative_faults as u64).to_le_bytes());
            hasher.update(&(step.slot.0 as u64).to_le_bytes());
            hasher.update(&(step.frame_set_before.len() as u64).to_le_bytes());
            for page_id in step.frame_set_before.as_slice() {
                hasher.update(&page_id.0.to_le_bytes());
            }
        }

        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{run, ReferenceString};

    fn result(policy: Policy, pages: Vec<i64>, capacity: usize) -> SimulationResult {
        let refs = ReferenceString::try_from(pages).unwrap();
        run(policy, &refs, Capacity::new(capacity).unwrap())
    }

    #[test]
    fn test_rates() {
        let r = result(Policy::Lru, vec![1, 2, 1, 1], 2);
        assert_eq!(r.total_faults(), 2);
        assert_eq!(r.total_hits(), 2);
        assert_eq!(r.hit_rate(), 0.5);
        assert_eq!(r.fault_rate(), 0.5);
    }

    #[test]
    fn test_fault_curve() {
        let r = result(Policy::Fifo, vec![1, 2, 1, 3], 2);
        assert_eq!(r.fault_curve(), vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_occupancy_matrix() {
        let r = result(Policy::Fifo, vec![1, 2, 3], 2);
        let m = r.occupancy();

        assert_eq!(m.len(), 2);
        assert_eq!(m[0], vec![None, Some(PageId(1)), Some(PageId(1))]);
        assert_eq!(m[1], vec![None, None, Some(PageId(2))]);
        assert_eq!(r.final_frames().as_slice(), &[PageId(3), PageId(2)]);
    }

    #[test]
    fn test_occupancy_stops_at_last_filled_slot() {
        let r = result(Policy::Lru, vec![1, 2, 1], usize::MAX);
        let m = r.occupancy();

        assert_eq!(r.unique_pages(), 2);
        assert_eq!(m.len(), 2);
        assert_eq!(m[1], vec![None, None, Some(PageId(2))]);
    }

    #[test]
    fn test_fingerprint_distinguishes_policies() {
        let pages = vec![1, 2, 3, 1, 4, 1, 2];
        let fifo = result(Policy::Fifo, pages.clone(), 3);
        let lru = result(Policy::Lru, pages.clone(), 3);

        assert_eq!(fifo.fingerprint(), result(Policy::Fifo, pages, 3).fingerprint());
        assert_ne!(fifo.fingerprint(), lru.fingerprint());
    }
}
