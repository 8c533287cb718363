//! Frame Pool - the resident set of one simulation run.
//!
//! The [`FramePool`] provides:
//! - Membership tests for the current reference
//! - Capacity-checked insertion
//! - Eviction of a named resident page
//!
//! It knows nothing about eviction order; that lives in the
//! [`replacer`](crate::buffer::replacer) chosen for the run.

use std::collections::HashMap;

use crate::common::{Error, FrameCount, FrameId, PageId, Result};

/// A pool of at most `capacity` frames, each holding at most one page.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │                      FramePool                      │
/// │  ┌──────────────┐  ┌───────────────────────────┐    │
/// │  │ page_table   │  │ frames: Vec<Option<Page>> │    │
/// │  │PageId → Fid  │─▶│  [F0] [F1] ... (grows)    │    │
/// │  └──────────────┘  └───────────────────────────┘    │
/// │  ┌──────────────┐                                   │
/// │  │  free_list   │  vacated frames, lowest on top    │
/// │  │ Vec<FrameId> │                                   │
/// │  └──────────────┘                                   │
/// └─────────────────────────────────────────────────────┘
/// ```
///
/// Frames are created on first use, so memory follows the number of pages
/// actually loaded rather than the configured capacity. Any positive frame
/// count is accepted, including ones far larger than the trace.
///
/// An evicted page's frame goes on the free list and is reused before a new
/// frame is created, so the next insert lands in the same slot. That keeps
/// step-mode output stable: the incoming page replaces the victim in place.
///
/// # Invariant
/// `len() <= capacity()` and `frames.len() <= capacity()` at all times.
/// `insert` and `evict` are the only mutating operations.
#[derive(Debug, Clone)]
pub struct FramePool {
    /// Frames created so far, in frame order.
    frames: Vec<Option<PageId>>,

    /// Maps resident pages to their frame.
    page_table: HashMap<PageId, FrameId>,

    /// Vacated frame ids, sorted so the lowest id is on top.
    free_list: Vec<FrameId>,

    capacity: usize,
}

impl FramePool {
    /// Create an empty pool with room for `capacity` pages.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self::with_frame_count(FrameCount::new(capacity)?))
    }

    /// Create an empty pool from an already validated frame count.
    pub fn with_frame_count(frame_count: FrameCount) -> Self {
        Self {
            frames: Vec::new(),
            page_table: HashMap::new(),
            free_list: Vec::new(),
            capacity: frame_count.get(),
        }
    }

    /// Check if `page` is resident.
    #[inline]
    pub fn contains(&self, page: &PageId) -> bool {
        self.page_table.contains_key(page)
    }

    /// True when every frame holds a page.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.page_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_table.is_empty()
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load `page` into the lowest vacated frame, or a new frame if none
    /// was vacated.
    ///
    /// # Errors
    /// - `Error::Capacity` if the pool is full (evict first)
    /// - `Error::AlreadyResident` if `page` is already loaded
    pub fn insert(&mut self, page: PageId) -> Result<FrameId> {
        if self.contains(&page) {
            return Err(Error::AlreadyResident(page));
        }
        let frame_id = self.allocate_frame()?;

        self.frames[frame_id.0] = Some(page.clone());
        self.page_table.insert(page, frame_id);
        Ok(frame_id)
    }

    fn allocate_frame(&mut self) -> Result<FrameId> {
        if let Some(frame_id) = self.free_list.pop() {
            return Ok(frame_id);
        }
        if self.frames.len() == self.capacity {
            return Err(Error::Capacity {
                capacity: self.capacity,
            });
        }
        self.frames.push(None);
        Ok(FrameId::new(self.frames.len() - 1))
    }

    /// Remove `page` from the pool, freeing its frame.
    ///
    /// # Errors
    /// - `Error::NotResident` if `page` is not loaded
    pub fn evict(&mut self, page: &PageId) -> Result<FrameId> {
        let frame_id = self
            .page_table
            .remove(page)
            .ok_or_else(|| Error::NotResident(page.clone()))?;

        self.frames[frame_id.0] = None;
        // Keep the free list sorted so the lowest id is on top.
        let at = self
            .free_list
            .partition_point(|free| free.0 > frame_id.0);
        self.free_list.insert(at, frame_id);
        Ok(frame_id)
    }

    /// Resident pages in frame order.
    pub fn resident_pages(&self) -> impl Iterator<Item = &PageId> + '_ {
        self.frames.iter().flatten()
    }

    /// Copy of every created frame's contents, `None` for vacated frames.
    ///
    /// Frames that were never used are not included.
    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.frames.clone()
    }
}
