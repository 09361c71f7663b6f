//! Reporting on finished simulations.
//!
//! - [`SimulationSummary`] - headline metrics of one run
//! - [`timed_run`] / [`RunTiming`] - wall-clock measurement beside the trace
//! - [`summaries_to_csv`] / [`summaries_to_json`] - export formats
//! - [`render_trace`] / [`render_summary_table`] - terminal output

mod export;
mod render;
mod stats;
mod timing;

pub use export::{summaries_to_csv, summaries_to_json, CSV_HEADER};
pub use render::{render_summary_table, render_trace};
pub use stats::SimulationSummary;
pub use timing::{timed_run, timed_run_all, RunTiming, TimedRun};

use crate::engine::SimulationResult;

/// Summarize several runs, keeping their order.
pub fn summarize(results: &[SimulationResult]) -> Vec<SimulationSummary> {
    results.iter().map(SimulationSummary::from_result).collect()
}

/// Summarize several measured runs, keeping their order.
pub fn summarize_timed(runs: &[TimedRun]) -> Vec<SimulationSummary> {
    runs.iter().map(SimulationSummary::from_timed).collect()
}
