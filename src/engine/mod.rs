//! Replacement engine.
//!
//! Runs a replacement policy over a reference string and records what
//! happened at every reference.
//!
//! # Components
//! - [`simulate`] / [`simulate_all`] - validate raw input, then run
//! - [`run`] / [`run_all`] - run over already validated input
//! - [`Policy`] - FIFO, LRU or Optimal
//! - [`FrameSet`] - resident pages, by slot
//! - [`SimulationResult`] / [`Step`] - the trace and its derived views
//! - [`replacer`] - per-policy victim selection

mod frame_set;
mod policy;
mod reference;
pub mod replacer;
mod simulator;
mod trace;

pub use frame_set::FrameSet;
pub use policy::{Policy, UnknownPolicy};
pub use reference::{Capacity, ReferenceString};
pub use simulator::{run, run_all, simulate, simulate_all};
pub use trace::{SimulationResult, Step};
