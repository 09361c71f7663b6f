//! pagesim - a page-replacement simulator.
//!
//! Runs FIFO, LRU and Optimal page replacement over a reference string with
//! a fixed number of frames, and records the frame contents, hit/fault
//! outcome and running fault count at every reference.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input adapter (input/)  +  Config (common/)       │   │
//! │  │     "7, 0, 1, 2" → ReferenceString,  "3" → Capacity      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Replacement Engine (engine/)                │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │        Policies: FIFO | LRU | Optimal           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        FrameSet + Step + SimulationResult                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Reporting (report/)                      │   │
//! │  │      SimulationSummary + CSV/JSON + text tables          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`engine`] - The replacement engine and policies
//! - [`input`] - Parsing human-entered input
//! - [`report`] - Summary metrics, export and rendering
//!
//! # Quick Start
//! ```
//! use pagesim::input::{parse_capacity, parse_reference_string};
//! use pagesim::{run, Policy};
//!
//! let refs = parse_reference_string("7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1").unwrap();
//! let capacity = parse_capacity("3").unwrap();
//!
//! let result = run(Policy::Lru, &refs, capacity);
//! assert_eq!(result.total_faults(), 12);
//! ```

pub mod common;
pub mod engine;
pub mod input;
pub mod report;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameId, InputErrorKind, PageId, Result};
pub use engine::{
    run, run_all, simulate, simulate_all, Capacity, FrameSet, Policy, ReferenceString,
    SimulationResult, Step,
};
pub use report::SimulationSummary;
