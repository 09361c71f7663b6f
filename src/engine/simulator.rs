//! The replacement engine - one shared loop for every policy.

use tracing::{debug, info};

use crate::common::{FrameId, PageId, Result};
use crate::engine::replacer::Replacer;
use crate::engine::{Capacity, FrameSet, Policy, ReferenceString, SimulationResult, Step};

/// Validate the inputs and run one policy.
///
/// # Errors
/// - `Error::InvalidInput` if `pages` is empty or `capacity` is 0
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let pages: Vec<PageId> = [1, 2, 3, 1].into_iter().map(PageId).collect();
/// let result = simulate(Policy::Lru, &pages, 2).unwrap();
/// assert_eq!(result.total_faults(), 4);
/// ```
pub fn simulate(policy: Policy, pages: &[PageId], capacity: usize) -> Result<SimulationResult> {
    let capacity = Capacity::new(capacity)?;
    let refs = ReferenceString::new(pages.to_vec())?;
    Ok(run(policy, &refs, capacity))
}

/// Validate the inputs once and run every policy in [`Policy::ALL`] order.
///
/// One bad input fails all three runs together; there are no partial
/// results.
///
/// # Errors
/// - `Error::InvalidInput` if `pages` is empty or `capacity` is 0
pub fn simulate_all(pages: &[PageId], capacity: usize) -> Result<Vec<SimulationResult>> {
    let capacity = Capacity::new(capacity)?;
    let refs = ReferenceString::new(pages.to_vec())?;
    Ok(run_all(&Policy::ALL, &refs, capacity))
}

/// Run several policies over the same validated input.
pub fn run_all(
    policies: &[Policy],
    refs: &ReferenceString,
    capacity: Capacity,
) -> Vec<SimulationResult> {
    policies.iter().map(|&p| run(p, refs, capacity)).collect()
}

/// Run one policy over validated input. Cannot fail.
///
/// References are handled strictly in order:
/// 1. Snapshot the frame set
/// 2. Hit if the page is resident, fault otherwise
/// 3. On a fault, fill the next empty slot or overwrite the victim's slot
/// 4. Record the step
pub fn run(policy: Policy, refs: &ReferenceString, capacity: Capacity) -> SimulationResult {
    // No more pages can be resident than the string names, whatever the capacity.
    let unique_pages = refs.unique_pages();
    let resident_bound = capacity.get().min(unique_pages);

    let mut frames = FrameSet::new(capacity.get());
    let mut replacer = Replacer::new(policy, resident_bound);
    let mut steps = Vec::with_capacity(refs.len());
    let mut faults = 0;

    for (position, &page_id) in refs.iter().enumerate() {
        let frame_set_before = frames.clone();

        let step = match frames.find(page_id) {
            Some(slot) => {
                replacer.record_access(page_id);
                Step {
                    frame_set_before,
                    requested_page: page_id,
                    is_fault: false,
                    cumulative_faults: faults,
                    slot,
                    evicted: None,
                }
            }
            None => {
                faults += 1;
                let (slot, evicted) = load_page(
                    &mut frames,
                    &mut replacer,
                    page_id,
                    &refs.as_slice()[position + 1..],
                );
                if let Some(victim) = evicted {
                    debug!(%policy, position, %victim, page = %page_id, slot = slot.0, "evicted");
                }
                Step {
                    frame_set_before,
                    requested_page: page_id,
                    is_fault: true,
                    cumulative_faults: faults,
                    slot,
                    evicted,
                }
            }
        };

        steps.push(step);
    }

    info!(
        %policy,
        references = refs.len(),
        capacity = capacity.get(),
        faults,
        "simulation complete"
    );

    SimulationResult::new(policy, capacity, unique_pages, steps, frames)
}

/// Bring a faulting page in. Returns its slot and the page it displaced.
fn load_page(
    frames: &mut FrameSet,
    replacer: &mut Replacer,
    page_id: PageId,
    future: &[PageId],
) -> (FrameId, Option<PageId>) {
    if !frames.is_full() {
        let slot = frames.push(page_id);
        replacer.record_load(page_id);
        return (slot, None);
    }

    let slot = replacer.victim(frames, future);
    let victim = frames.replace(slot, page_id);
    replacer.record_load(page_id);
    (slot, Some(victim))
}
