//! Export adapter - summary tables as CSV or JSON text.

use serde::Serialize;

use crate::common::{Error, Result};
use crate::engine::Policy;
use crate::report::SimulationSummary;

/// Header row of the CSV export.
pub const CSV_HEADER: &str =
    "Algorithm,Page Faults,Hit Rate,Fault Rate,Execution Time,Avg Response Time";

/// Render summaries as CSV, one row per policy.
///
/// Rates are percentages with two decimals, e.g. `41.67%`. Execution time is
/// in seconds with six decimals and average response time in milliseconds
/// with four, e.g. `0.000012 s` and `0.0010 ms`; both cells are empty for an
/// untimed summary. Rows end in `\n`.
pub fn summaries_to_csv(summaries: &[SimulationSummary]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + summaries.len() * 56);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for s in summaries {
        let (execution, response) = match s.timing {
            Some(t) => (
                format!("{:.6} s", t.execution_time.as_secs_f64()),
                format!("{:.4} ms", t.avg_response_time().as_secs_f64() * 1000.0),
            ),
            None => (String::new(), String::new()),
        };
        out.push_str(&format!(
            "{},{},{:.2}%,{:.2}%,{},{}\n",
            s.policy,
            s.faults,
            s.hit_rate() * 100.0,
            s.fault_rate() * 100.0,
            execution,
            response
        ));
    }

    out
}

/// One exported row, with the derived rates filled in.
#[derive(Serialize)]
struct SummaryRecord {
    policy: Policy,
    references: usize,
    capacity: usize,
    faults: usize,
    hits: usize,
    unique_pages: usize,
    hit_rate: f64,
    fault_rate: f64,
    memory_utilization: f64,
    execution_time_secs: Option<f64>,
    avg_response_time_ms: Option<f64>,
}

impl From<&SimulationSummary> for SummaryRecord {
    fn from(s: &SimulationSummary) -> Self {
        Self {
            policy: s.policy,
            references: s.references,
            capacity: s.capacity,
            faults: s.faults,
            hits: s.hits,
            unique_pages: s.unique_pages,
            hit_rate: s.hit_rate(),
            fault_rate: s.fault_rate(),
            memory_utilization: s.memory_utilization(),
            execution_time_secs: s.timing.map(|t| t.execution_time.as_secs_f64()),
            avg_response_time_ms: s
                .timing
                .map(|t| t.avg_response_time().as_secs_f64() * 1000.0),
        }
    }
}

/// Render summaries as a pretty-printed JSON array.
///
/// # Errors
/// - `Error::Export` if serialization fails
pub fn summaries_to_json(summaries: &[SimulationSummary]) -> Result<String> {
    let records: Vec<SummaryRecord> = summaries.iter().map(SummaryRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RunTiming;
    use std::time::Duration;

    fn summary(policy: Policy, faults: usize, references: usize) -> SimulationSummary {
        SimulationSummary {
            policy,
            references,
            faults,
            hits: references - faults,
            unique_pages: 6,
            capacity: 3,
            timing: None,
        }
    }

    fn timed(s: SimulationSummary) -> SimulationSummary {
        s.with_timing(RunTiming {
            execution_time: Duration::from_millis(3),
            references: s.references,
        })
    }

    #[test]
    fn test_csv_layout() {
        let csv = summaries_to_csv(&[summary(Policy::Fifo, 5, 12), summary(Policy::Lru, 3, 12)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "FIFO,5,58.33%,41.67%,,");
        assert_eq!(lines[2], "LRU,3,75.00%,25.00%,,");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_timing_columns() {
        let csv = summaries_to_csv(&[timed(summary(Policy::Lru, 4, 12))]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[1], "LRU,4,66.67%,33.33%,0.003000 s,0.2500 ms");
    }

    #[test]
    fn test_csv_empty_has_header_only() {
        assert_eq!(summaries_to_csv(&[]), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_json_includes_derived_rates() {
        let json = summaries_to_json(&[summary(Policy::Optimal, 3, 12)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["policy"], "Optimal");
        assert_eq!(value[0]["faults"], 3);
        assert_eq!(value[0]["hit_rate"], 0.75);
        assert_eq!(value[0]["memory_utilization"], 2.0);
        assert!(value[0]["execution_time_secs"].is_null());
        assert!(value[0]["avg_response_time_ms"].is_null());
    }

    #[test]
    fn test_json_includes_timing() {
        let json = summaries_to_json(&[timed(summary(Policy::Fifo, 6, 12))]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["execution_time_secs"], 0.003);
        assert!((value[0]["avg_response_time_ms"].as_f64().unwrap() - 0.25).abs() < 1e-9);
    }
}
