//! Immutable output of a simulation run.

use crate::buffer::RunStats;
use crate::common::{FrameCount, PageId};
use crate::simulation::Algorithm;

/// How one reference was served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Hit,
    /// The page was loaded; `evicted` is the page it replaced, if the pool
    /// was full.
    Fault { evicted: Option<PageId> },
}

/// One entry of a run's event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    /// Index of the reference in the trace.
    pub position: usize,
    pub page: PageId,
    pub outcome: Outcome,

    /// Frame contents after this reference, in frame order.
    ///
    /// Only recorded in step mode.
    pub frames: Option<Vec<Option<PageId>>>,
}

impl AccessEvent {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome == Outcome::Hit
    }

    /// Page replaced by this reference, if any.
    #[inline]
    pub fn evicted(&self) -> Option<&PageId> {
        match &self.outcome {
            Outcome::Fault { evicted } => evicted.as_ref(),
            Outcome::Hit => None,
        }
    }
}

/// Event log and statistics of one algorithm over one trace.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub frame_count: FrameCount,

    /// One event per trace position, in trace order.
    pub events: Vec<AccessEvent>,
    pub stats: RunStats,
}

impl RunResult {
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.stats.hits
    }

    #[inline]
    pub fn total_references(&self) -> u64 {
        self.stats.total_references()
    }

    /// Hits divided by total references, 0 for an empty trace.
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_ratio()
    }

    /// Pages evicted, in the order they were evicted.
    pub fn evictions(&self) -> impl Iterator<Item = &PageId> + '_ {
        self.events.iter().filter_map(AccessEvent::evicted)
    }
}
