//! Summary metrics for a simulation run.

use std::fmt;

use serde::Serialize;

use crate::engine::{Policy, SimulationResult};
use crate::report::{RunTiming, TimedRun};

/// The headline numbers of one run.
///
/// Unlike [`SimulationResult`], this holds no trace and is cheap to copy,
/// print, compare and serialize.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy, SimulationSummary};
///
/// let pages: Vec<PageId> = [1, 2, 1, 2].into_iter().map(PageId).collect();
/// let result = simulate(Policy::Fifo, &pages, 2).unwrap();
/// let summary = SimulationSummary::from_result(&result);
/// assert_eq!(summary.hit_rate(), 0.5);
/// println!("{}", summary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub policy: Policy,
    pub references: usize,
    pub faults: usize,
    pub hits: usize,
    pub unique_pages: usize,
    pub capacity: usize,

    /// Wall-clock timing, when the run was measured.
    pub timing: Option<RunTiming>,
}

impl SimulationSummary {
    /// Summarize a finished run.
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            policy: result.policy(),
            references: result.len(),
            faults: result.total_faults(),
            hits: result.total_hits(),
            unique_pages: result.unique_pages(),
            capacity: result.capacity(),
            timing: None,
        }
    }

    /// Summarize a measured run.
    pub fn from_timed(timed: &TimedRun) -> Self {
        Self::from_result(&timed.result).with_timing(timed.timing)
    }

    /// Attach wall-clock timing.
    pub fn with_timing(mut self, timing: RunTiming) -> Self {
        self.timing = Some(timing);
        self
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }

    /// Distinct pages referenced per frame.
    ///
    /// Informational only and NOT clamped: a working set larger than the
    /// frame set gives a value above 1.0.
    pub fn memory_utilization(&self) -> f64 {
        self.unique_pages as f64 / self.capacity as f64
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ faults: {}, hits: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.faults,
            self.hits,
            self.hit_rate() * 100.0
        )?;
        if let Some(timing) = self.timing {
            write!(f, " in {:.6} s", timing.execution_time.as_secs_f64())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;
    use crate::engine::simulate;
    use std::time::Duration;

    fn summary(policy: Policy, pages: &[i64], capacity: usize) -> SimulationSummary {
        let pages: Vec<PageId> = pages.iter().copied().map(PageId).collect();
        SimulationSummary::from_result(&simulate(policy, &pages, capacity).unwrap())
    }

    #[test]
    fn test_summary_counts() {
        let s = summary(Policy::Lru, &[1, 2, 1, 3, 1], 2);
        assert_eq!(s.references, 5);
        assert_eq!(s.faults, 3);
        assert_eq!(s.hits, 2);
        assert_eq!(s.unique_pages, 3);
        assert_eq!(s.capacity, 2);
    }

    #[test]
    fn test_summary_rates() {
        let s = summary(Policy::Fifo, &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2], 2);
        assert_eq!(s.fault_rate(), 0.2);
        assert_eq!(s.hit_rate(), 0.8);
    }

    #[test]
    fn test_memory_utilization_not_clamped() {
        let s = summary(Policy::Optimal, &[1, 2, 3, 4, 5, 6], 3);
        assert_eq!(s.memory_utilization(), 2.0);
    }

    #[test]
    fn test_unique_pages_match_reference_string() {
        let s = summary(Policy::Lru, &[3, 3, -1, 3, 7, -1], 2);
        assert_eq!(s.unique_pages, 3);
        assert_eq!(s.timing, None);
    }

    #[test]
    fn test_summary_with_timing() {
        let timing = RunTiming {
            execution_time: Duration::from_millis(1500),
            references: 5,
        };
        let s = summary(Policy::Fifo, &[1, 1, 1, 1, 2], 1).with_timing(timing);

        assert_eq!(s.timing, Some(timing));
        assert!(format!("{}", s).ends_with("in 1.500000 s"));
    }

    #[test]
    fn test_summary_display() {
        let s = summary(Policy::Fifo, &[1, 1, 1, 1, 2], 1);
        let display = format!("{}", s);

        assert!(display.starts_with("FIFO"));
        assert!(display.contains("faults: 2"));
        assert!(display.contains("hits: 3"));
        assert!(display.contains("60.00%"));
    }
}
