//! Report rendering.
//!
//! - [`Report`] - The three run results of one invocation, in report order
//! - [`ReportFormatter`] - The stdout report read by the dashboard
//! - [`write_file_report`] / [`write_csv`] - Optional report files
//!
//! # Stdout layout
//! ```text
//! ==== Virtual Memory Manager ====
//! Frames: 3
//! Total References: 6
//!
//! --- FIFO Page Replacement ---
//! Page 1 -> FAULT
//! Page 4 -> FAULT (Replaced 1)
//! ...
//!
//! Algorithm | Page Faults | Hits | Hit Ratio
//! --------------------------------------------
//! FIFO      | 4 | 2 | 0.3333
//! LRU       | 4 | 2 | 0.3333
//! Optimal   | 4 | 2 | 0.3333
//! ```
//!
//! Summary lines start with the algorithm name and carry faults, hits and
//! hit ratio in pipe-delimited fields 2 to 4. The dashboard parses exactly
//! that, so the layout must not change.

mod files;
mod formatter;

pub use files::{write_csv, write_file_report};
pub use formatter::{summary_line, ReportFormatter, StepMode};

use crate::common::{Error, FrameCount, Result};
use crate::simulation::{Algorithm, RunResult};

/// Results of all three algorithms for one trace and frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    frame_count: FrameCount,
    total_references: usize,

    /// Exactly one result per algorithm, in `Algorithm::ALL` order.
    results: Vec<RunResult>,
}

impl Report {
    /// Collect run results into report order.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` unless there is exactly one result per
    ///   algorithm
    pub fn new(
        frame_count: FrameCount,
        total_references: usize,
        mut results: Vec<RunResult>,
    ) -> Result<Self> {
        results.sort_by_key(|r| r.algorithm);
        let found: Vec<Algorithm> = results.iter().map(|r| r.algorithm).collect();
        if found != Algorithm::ALL {
            return Err(Error::InvariantViolation {
                algorithm: "report",
                position: 0,
                detail: format!("expected one result per algorithm, got {found:?}"),
            });
        }

        Ok(Self {
            frame_count,
            total_references,
            results,
        })
    }

    pub fn frame_count(&self) -> FrameCount {
        self.frame_count
    }

    pub fn total_references(&self) -> usize {
        self.total_references
    }

    /// Results in FIFO, LRU, Optimal order.
    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    pub fn get(&self, algorithm: Algorithm) -> &RunResult {
        // Construction guarantees one result per algorithm in ALL order.
        &self.results[algorithm as usize]
    }
}
