//! LRU (Least Recently Used) replacement policy.

use std::cmp::Reverse;

use priority_queue::PriorityQueue;

use crate::buffer::replacer::{AccessKind, Replacer};
use crate::buffer::FramePool;
use crate::common::PageId;
use crate::trace::Lookahead;

/// Evicts the page whose last access is the oldest.
///
/// Pages sit in a priority queue keyed by the logical time of their last
/// access. Every access, hit or fault, moves the page to most-recent; the
/// least recently accessed page is at the top of the queue.
#[derive(Debug)]
pub struct LruReplacer {
    pages: PriorityQueue<PageId, Reverse<u64>>,

    /// Logical clock, incremented on every access.
    clock: u64,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            pages: PriorityQueue::new(),
            clock: 0,
        }
    }

    /// The page that would be evicted next, without evicting it.
    #[cfg(test)]
    fn peek(&self) -> Option<&PageId> {
        self.pages.peek().map(|(page, _)| page)
    }
}

impl Default for LruReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page: &PageId, _kind: AccessKind) {
        self.clock += 1;
        // Bump the priority of a tracked page, otherwise start tracking it.
        if self
            .pages
            .change_priority(page, Reverse(self.clock))
            .is_none()
        {
            self.pages.push(page.clone(), Reverse(self.clock));
        }
    }

    fn evict(&mut self, _pool: &FramePool, _lookahead: Lookahead<'_>) -> Option<PageId> {
        self.pages.pop().map(|(page, _)| page)
    }

    fn size(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::ReferenceIndex;

    fn pid(n: u64) -> PageId {
        PageId::new(n)
    }

    fn evict(replacer: &mut LruReplacer) -> Option<PageId> {
        let pool = FramePool::new(1).unwrap();
        replacer.evict(&pool, ReferenceIndex::default().at(0))
    }

    #[test]
    fn test_lru_basic() {
        let mut replacer = LruReplacer::new();

        for n in 1..=3 {
            replacer.record_access(&pid(n), AccessKind::Fault);
        }
        assert_eq!(replacer.size(), 3);

        assert_eq!(evict(&mut replacer), Some(pid(1)));
        assert_eq!(evict(&mut replacer), Some(pid(2)));
        assert_eq!(evict(&mut replacer), Some(pid(3)));
        assert_eq!(evict(&mut replacer), None);
    }

    #[test]
    fn test_lru_hit_moves_to_most_recent() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(&pid(1), AccessKind::Fault);
        replacer.record_access(&pid(2), AccessKind::Fault);
        replacer.record_access(&pid(3), AccessKind::Fault);
        assert_eq!(replacer.peek(), Some(&pid(1)));

        // Accessing 1 again makes 2 the least recently used.
        replacer.record_access(&pid(1), AccessKind::Hit);
        assert_eq!(replacer.size(), 3);
        assert_eq!(replacer.peek(), Some(&pid(2)));

        replacer.record_access(&pid(2), AccessKind::Hit);
        assert_eq!(evict(&mut replacer), Some(pid(3)));
        assert_eq!(evict(&mut replacer), Some(pid(1)));
        assert_eq!(evict(&mut replacer), Some(pid(2)));
    }

    #[test]
    fn test_lru_evicted_page_forgotten() {
        let mut replacer = LruReplacer::new();

        replacer.record_access(&pid(1), AccessKind::Fault);
        replacer.record_access(&pid(2), AccessKind::Fault);
        assert_eq!(evict(&mut replacer), Some(pid(1)));
        assert_eq!(replacer.size(), 1);
        assert_eq!(replacer.peek(), Some(&pid(2)));
    }
}
