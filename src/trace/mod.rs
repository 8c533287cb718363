//! Page reference traces.
//!
//! - [`Trace`] - The immutable sequence of page references for one invocation
//! - [`TraceLoader`] - Reads and validates a trace file
//! - [`TraceSummary`] - Frequency statistics used by the file report
//! - [`ReferenceIndex`] / [`Lookahead`] - Next-use queries for the Optimal policy

mod loader;
mod lookahead;

use std::collections::BTreeMap;

use crate::common::PageId;

pub use loader::TraceLoader;
pub use lookahead::{Lookahead, ReferenceIndex};

/// An ordered, read-only sequence of page references.
///
/// A trace is loaded once and never mutated afterwards, so a shared `&Trace`
/// can be handed to every simulation run at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pages: Vec<PageId>,
}

impl Trace {
    /// Build a trace from page ids in program order.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageId> + '_ {
        self.pages.iter()
    }

    /// Compute reference counts per page.
    pub fn summary(&self) -> TraceSummary {
        let mut frequency = BTreeMap::new();
        for page in self.iter() {
            *frequency.entry(page.clone()).or_insert(0) += 1;
        }
        TraceSummary {
            total_references: self.len(),
            frequency,
        }
    }
}

impl From<Vec<u64>> for Trace {
    fn from(pages: Vec<u64>) -> Self {
        Self::new(pages.into_iter().map(PageId::new).collect())
    }
}

/// Reference statistics of a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSummary {
    pub total_references: usize,

    /// References per page, ordered by page id.
    pub frequency: BTreeMap<PageId, usize>,
}

impl TraceSummary {
    /// Number of distinct pages.
    pub fn unique_pages(&self) -> usize {
        self.frequency.len()
    }
}
