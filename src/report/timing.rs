//! Wall-clock timing of simulation runs.
//!
//! Timing lives beside [`SimulationResult`], never inside it, so traces and
//! their fingerprints stay identical from one run to the next.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::engine::{run, Capacity, Policy, ReferenceString, SimulationResult};

/// How long one run took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunTiming {
    /// Wall-clock time for the whole reference string.
    pub execution_time: Duration,

    /// References handled in that time.
    pub references: usize,
}

impl RunTiming {
    /// Mean time spent per reference.
    pub fn avg_response_time(&self) -> Duration {
        if self.references == 0 {
            Duration::ZERO
        } else {
            self.execution_time.div_f64(self.references as f64)
        }
    }
}

/// A finished run together with its timing.
#[derive(Debug, Clone)]
pub struct TimedRun {
    pub result: SimulationResult,
    pub timing: RunTiming,
}

/// Run one policy and measure it.
///
/// # Example
/// ```
/// use pagesim::input::{parse_capacity, parse_reference_string};
/// use pagesim::report::timed_run;
/// use pagesim::Policy;
///
/// let refs = parse_reference_string("1, 2, 1, 3").unwrap();
/// let timed = timed_run(Policy::Fifo, &refs, parse_capacity("2").unwrap());
/// assert_eq!(timed.timing.references, 4);
/// assert_eq!(timed.result.total_faults(), 3);
/// ```
pub fn timed_run(policy: Policy, refs: &ReferenceString, capacity: Capacity) -> TimedRun {
    let start = Instant::now();
    let result = run(policy, refs, capacity);
    let execution_time = start.elapsed();

    debug!(%policy, elapsed_us = execution_time.as_micros() as u64, "run timed");

    TimedRun {
        result,
        timing: RunTiming {
            execution_time,
            references: refs.len(),
        },
    }
}

/// Run and measure several policies over the same validated input.
pub fn timed_run_all(
    policies: &[Policy],
    refs: &ReferenceString,
    capacity: Capacity,
) -> Vec<TimedRun> {
    policies
        .iter()
        .map(|&p| timed_run(p, refs, capacity))
        .collect()
}
