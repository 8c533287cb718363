//! Per-run statistics.

use std::fmt;

use crate::common::config::RATIO_PRECISION;

/// Fault/hit counters of one simulation run.
///
/// Counted by the runner while it owns the pool, then frozen into the
/// [`RunResult`](crate::simulation::RunResult).
///
/// # Example
/// ```
/// use vmsim::RunStats;
///
/// let stats = RunStats { faults: 4, hits: 2, evictions: 1 };
/// assert_eq!(stats.total_references(), 6);
/// assert_eq!(stats.hit_ratio_text(), "0.3333");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// References that were not resident.
    pub faults: u64,

    /// References that were resident.
    pub hits: u64,

    /// Faults that had to evict a page (the pool was full).
    pub evictions: u64,
}

impl RunStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every reference is either a hit or a fault.
    #[inline]
    pub fn total_references(&self) -> u64 {
        self.faults + self.hits
    }

    /// Hits divided by total references (0.0 to 1.0), 0 for an empty run.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.total_references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Hit ratio as fixed-point text, as printed in every report.
    pub fn hit_ratio_text(&self) -> String {
        format!("{:.*}", RATIO_PRECISION, self.hit_ratio())
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, hit_ratio: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.hit_ratio() * 100.0
        )
    }
}
