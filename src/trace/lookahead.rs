//! Next-use index over a trace.
//!
//! The Optimal policy asks, for each resident page, where it is referenced
//! next. Answering that by scanning the rest of the trace on every eviction
//! is quadratic, so the positions of every page are collected once up front
//! and queried with a binary search.

use std::collections::HashMap;

use crate::common::PageId;
use crate::trace::Trace;

/// Positions of every reference, grouped by page.
///
/// Built once per trace and then only read, so a single index can be shared
/// by concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// Ascending trace positions per page.
    positions: HashMap<PageId, Vec<usize>>,
}

impl ReferenceIndex {
    pub fn new(trace: &Trace) -> Self {
        let mut positions: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (position, page) in trace.iter().enumerate() {
            positions.entry(page.clone()).or_default().push(position);
        }
        Self { positions }
    }

    /// First reference to `page` strictly after `position`.
    pub fn next_use(&self, page: &PageId, position: usize) -> Option<usize> {
        let positions = self.positions.get(page)?;
        let after = positions.partition_point(|&at| at <= position);
        positions.get(after).copied()
    }

    /// View of the trace from `position` onwards.
    #[inline]
    pub fn at(&self, position: usize) -> Lookahead<'_> {
        Lookahead {
            index: self,
            position,
        }
    }
}

/// Read-only view of the references after the current one.
///
/// Handed to [`Replacer::evict`](crate::buffer::replacer::Replacer::evict);
/// only the Optimal policy reads it.
#[derive(Debug, Clone, Copy)]
pub struct Lookahead<'a> {
    index: &'a ReferenceIndex,
    position: usize,
}

impl Lookahead<'_> {
    /// Position of the current reference.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Next position at which `page` is referenced, or `None` if it never is.
    #[inline]
    pub fn next_use(&self, page: &PageId) -> Option<usize> {
        self.index.next_use(page, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: u64) -> PageId {
        PageId::new(n)
    }

    #[test]
    fn test_next_use() {
        let trace = Trace::from(vec![1, 2, 1, 3, 1]);
        let index = ReferenceIndex::new(&trace);

        assert_eq!(index.next_use(&pid(1), 0), Some(2));
        assert_eq!(index.next_use(&pid(1), 2), Some(4));
        assert_eq!(index.next_use(&pid(1), 4), None);
        assert_eq!(index.next_use(&pid(2), 0), Some(1));
        assert_eq!(index.next_use(&pid(2), 1), None);
        assert_eq!(index.next_use(&pid(9), 0), None);
    }

    #[test]
    fn test_lookahead_is_strictly_after_position() {
        let trace = Trace::from(vec![5, 5, 6]);
        let index = ReferenceIndex::new(&trace);
        let lookahead = index.at(1);

        assert_eq!(lookahead.position(), 1);
        assert_eq!(lookahead.next_use(&pid(5)), None);
        assert_eq!(lookahead.next_use(&pid(6)), Some(2));
    }

    #[test]
    fn test_empty_trace_index() {
        let index = ReferenceIndex::new(&Trace::default());
        assert_eq!(index.at(0).next_use(&pid(0)), None);
    }
}
