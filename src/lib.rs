//! vmsim - A virtual-memory page-replacement simulator.
//!
//! Replays a trace of page references against a fixed number of frames under
//! three eviction policies and reports faults, hits and hit ratio for each.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                             vmsim                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Trace Loader (trace/)                       │   │
//! │  │        text file → Trace (read-only, shared)             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Simulation Runner (simulation/)                 │   │
//! │  │     one run per algorithm, each with its own pool        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  FramePool + Replacer: FIFO | LRU | Optimal     │   │   │
//! │  │   │                  (buffer/)                      │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Report Formatter (report/)                   │   │
//! │  │       stdout report, optional report.txt / CSV           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`trace`] - Trace loading
//! - [`buffer`] - Frame pool and eviction policies
//! - [`simulation`] - The per-algorithm runs
//! - [`report`] - Output rendering
//!
//! # Quick Start
//! ```
//! use vmsim::{FrameCount, Report, ReportFormatter, SimulationConfig, Simulator, TraceLoader};
//!
//! let trace = TraceLoader::new().parse("1 2 3 4 1 2 5 1 2 3 4 5").unwrap();
//! let frames = FrameCount::parse("3").unwrap();
//!
//! let results = Simulator::new(&trace, SimulationConfig::new(frames)).run_all().unwrap();
//! let report = Report::new(frames, trace.len(), results).unwrap();
//!
//! let mut out = Vec::new();
//! ReportFormatter::default().write(&report, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("FIFO      | 9 | 3 | 0.2500"));
//! ```

pub mod buffer;
pub mod common;
pub mod report;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCount, FrameId, InputErrorKind, PageId, Result, SimulationConfig};

pub use buffer::{FramePool, RunStats};
pub use report::{Report, ReportFormatter, StepMode};
pub use simulation::{AccessEvent, Algorithm, Outcome, RunResult, Simulator};
pub use trace::{Lookahead, ReferenceIndex, Trace, TraceLoader};
