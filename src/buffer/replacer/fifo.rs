//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::buffer::replacer::{AccessKind, Replacer};
use crate::buffer::FramePool;
use crate::common::PageId;
use crate::trace::Lookahead;

/// Evicts pages in the order they were loaded.
///
/// Hits never change a page's position: a page loaded early is evicted
/// early no matter how often it is used afterwards. This is the policy that
/// exhibits Belady's anomaly.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Pages in arrival order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Replacer for FifoReplacer {
    /// Only a fault enqueues, and only if the page is not already queued.
    fn record_access(&mut self, page: &PageId, kind: AccessKind) {
        if kind == AccessKind::Fault && !self.in_queue.contains(page) {
            self.in_queue.insert(page.clone());
            self.queue.push_back(page.clone());
        }
    }

    fn evict(&mut self, _pool: &FramePool, _lookahead: Lookahead<'_>) -> Option<PageId> {
        let victim = self.queue.pop_front()?;
        self.in_queue.remove(&victim);
        Some(victim)
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
