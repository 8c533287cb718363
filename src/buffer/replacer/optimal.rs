//! Optimal (Belady's MIN) replacement policy.
//!
//! Unlike the other policies this one is not online: it needs to know where
//! each resident page is referenced next. That comes from a
//! [`Lookahead`] over a next-use index built once per trace, so an eviction
//! costs one lookup per resident page instead of a scan of the remaining
//! trace.

use std::cmp::Reverse;

use log::trace;

use crate::buffer::replacer::{AccessKind, Replacer};
use crate::buffer::FramePool;
use crate::common::PageId;
use crate::trace::Lookahead;

/// Evicts the resident page whose next use is furthest in the future.
///
/// Pages that are never referenced again count as furthest of all. When
/// several resident pages are never referenced again, the lowest page id is
/// evicted.
///
/// The policy keeps no state of its own; the pool's resident set and the
/// lookahead are all it needs.
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Create a new Optimal replacer.
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, _page: &PageId, _kind: AccessKind) {}

    fn evict(&mut self, pool: &FramePool, lookahead: Lookahead<'_>) -> Option<PageId> {
        // Never used again beats any next use; among those the lowest page
        // wins. Two resident pages never share a next-use position.
        let (never_used, _, Reverse(victim)) = pool
            .resident_pages()
            .map(|page| {
                let next_use = lookahead.next_use(page);
                (next_use.is_none(), next_use, Reverse(page))
            })
            .max()?;

        if never_used {
            trace!(
                "optimal: page {victim} is not referenced after position {}",
                lookahead.position()
            );
        }
        Some(victim.clone())
    }

    fn size(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{ReferenceIndex, Trace};

    /// Evict from a full pool holding `resident` when `current` faults and
    /// `upcoming` follows it in the trace.
    fn victim(resident: &[u64], current: u64, upcoming: &[u64]) -> Option<PageId> {
        let mut pool = FramePool::new(resident.len().max(1)).unwrap();
        for &p in resident {
            pool.insert(PageId::new(p)).unwrap();
        }

        let mut pages = vec![current];
        pages.extend_from_slice(upcoming);
        let index = ReferenceIndex::new(&Trace::from(pages));

        OptimalReplacer::new().evict(&pool, index.at(0))
    }

    #[test]
    fn test_evicts_furthest_next_use() {
        assert_eq!(victim(&[1, 2, 3], 4, &[2, 1, 2, 3, 1]), Some(PageId::new(3)));
    }

    #[test]
    fn test_prefers_page_never_used_again() {
        assert_eq!(victim(&[1, 2, 3], 4, &[3, 3, 1]), Some(PageId::new(2)));
    }

    #[test]
    fn test_ties_go_to_lowest_page() {
        // 9 and 4 are both never used again.
        assert_eq!(victim(&[9, 4, 6], 5, &[6, 6]), Some(PageId::new(4)));
    }

    #[test]
    fn test_empty_lookahead() {
        assert_eq!(victim(&[5, 2, 8], 1, &[]), Some(PageId::new(2)));
    }

    #[test]
    fn test_only_references_after_position_count() {
        // Page 1 was referenced before the current position but not after.
        let trace = Trace::from(vec![1, 2, 1, 3, 2]);
        let index = ReferenceIndex::new(&trace);
        let mut pool = FramePool::new(2).unwrap();
        pool.insert(PageId::new(1)).unwrap();
        pool.insert(PageId::new(2)).unwrap();

        assert_eq!(
            OptimalReplacer::new().evict(&pool, index.at(3)),
            Some(PageId::new(1))
        );
    }

    #[test]
    fn test_empty_pool_has_no_victim() {
        let pool = FramePool::new(2).unwrap();
        let index = ReferenceIndex::new(&Trace::from(vec![1]));

        assert_eq!(OptimalReplacer::new().evict(&pool, index.at(0)), None);
    }
}
