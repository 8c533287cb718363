//! Simulation of the replacement policies over a trace.
//!
//! - [`Algorithm`] - Which policy to run
//! - [`Simulator`] - Replays a trace, one run per algorithm
//! - [`RunResult`] / [`AccessEvent`] - Immutable per-run output

mod algorithm;
mod result;
mod runner;

pub use algorithm::Algorithm;
pub use result::{AccessEvent, Outcome, RunResult};
pub use runner::Simulator;
