//! Plain-text rendering for terminals.

use std::fmt::Write;

use crate::common::FrameId;
use crate::engine::{FrameSet, SimulationResult};
use crate::report::SimulationSummary;

/// Render the frame occupancy of a run as a text table.
///
/// One column per reference. Each frame row shows the slot contents
/// *after* that reference was handled, and the last row marks faults with
/// `F`. Slot identity is preserved across columns. Slots the run never
/// filled get no row.
///
/// ```text
/// LRU, 3 frames
/// ref     |  7  0  1  2  0
/// frame 0 |  7  7  7  2  2
/// frame 1 |     0  0  0  0
/// frame 2 |        1  1  1
/// fault   |  F  F  F  F
/// ```
pub fn render_trace(result: &SimulationResult) -> String {
    let steps = result.steps();
    let after: Vec<&FrameSet> = (0..steps.len())
        .map(|i| {
            steps
                .get(i + 1)
                .map_or(result.final_frames(), |next| &next.frame_set_before)
        })
        .collect();

    let width = steps
        .iter()
        .map(|s| s.requested_page.to_string().len())
        .max()
        .unwrap_or(1)
        .max(2);

    let mut out = String::new();
    let _ = writeln!(out, "{}, {} frames", result.policy(), result.capacity());

    let _ = write!(out, "{:<8}|", "ref");
    for step in steps {
        let _ = write!(out, " {:>width$}", step.requested_page.to_string());
    }
    out.push('\n');

    for slot in 0..result.final_frames().len() {
        let _ = write!(out, "{:<8}|", format!("frame {}", slot));
        for frames in &after {
            let cell = frames
                .get(FrameId::new(slot))
                .map(|p| p.to_string())
                .unwrap_or_default();
            let _ = write!(out, " {:>width$}", cell);
        }
        out.push('\n');
    }

    let _ = write!(out, "{:<8}|", "fault");
    for step in steps {
        let _ = write!(out, " {:>width$}", if step.is_fault { "F" } else { "" });
    }
    out.push('\n');

    trim_lines(out)
}

/// Render summaries as an aligned text table.
///
/// Timing columns appear only when at least one summary was measured.
pub fn render_summary_table(summaries: &[SimulationSummary]) -> String {
    let timed = summaries.iter().any(|s| s.timing.is_some());

    let mut out = String::new();
    let _ = write!(
        out,
        "{:<10} {:>7} {:>6} {:>9} {:>11}",
        "Algorithm", "Faults", "Hits", "Hit Rate", "Fault Rate"
    );
    if timed {
        let _ = write!(out, " {:>12} {:>13}", "Exec Time", "Avg Response");
    }
    out.push('\n');

    for s in summaries {
        let _ = write!(
            out,
            "{:<10} {:>7} {:>6} {:>8.2}% {:>10.2}%",
            s.policy.name(),
            s.faults,
            s.hits,
            s.hit_rate() * 100.0,
            s.fault_rate() * 100.0
        );
        if let Some(t) = s.timing {
            let _ = write!(
                out,
                " {:>10.6} s {:>10.4} ms",
                t.execution_time.as_secs_f64(),
                t.avg_response_time().as_secs_f64() * 1000.0
            );
        }
        out.push('\n');
    }
    out
}

fn trim_lines(text: String) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
