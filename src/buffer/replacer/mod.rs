//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First-In-First-Out by arrival
//! - [`LruReplacer`] - Least Recently Used
//! - [`OptimalReplacer`] - Belady's optimal policy (needs lookahead)
//!
//! All three share the [`Replacer`] interface so the simulation runner drives
//! them with one loop.

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

use crate::buffer::FramePool;
use crate::common::PageId;
use crate::trace::Lookahead;

/// How a reference was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    /// The page was already resident.
    Hit,
    /// The page was loaded into the pool by this reference.
    Fault,
}

/// Page replacement policy.
///
/// The runner calls [`record_access`](Replacer::record_access) once per
/// reference, after the pool has been updated, and
/// [`evict`](Replacer::evict) only on a fault while the pool is full.
pub trait Replacer: Send {
    /// Update bookkeeping for a reference to `page`.
    fn record_access(&mut self, page: &PageId, kind: AccessKind);

    /// Choose the resident page to evict and drop it from the policy's
    /// bookkeeping.
    ///
    /// `lookahead` answers where a page is referenced after the current
    /// position. Only the Optimal policy reads it; the trace is never mutated.
    ///
    /// Returns `None` if the policy has no candidate, which the runner
    /// treats as a contract breach.
    fn evict(&mut self, pool: &FramePool, lookahead: Lookahead<'_>) -> Option<PageId>;

    /// Number of pages the policy is tracking.
    fn size(&self) -> usize;
}
