//! Error types for the simulator.

use std::path::PathBuf;

use crate::common::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a trace file was rejected.
#[derive(Debug, thiserror::Error)]
pub enum InputErrorKind {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token is not a non-negative integer.
    ///
    /// `position` is the 1-based index of the token in the file.
    #[error("token #{position} {token:?} is not a non-negative page number")]
    BadToken { position: usize, token: String },

    /// The file holds no references and the caller required at least one.
    #[error("trace contains no page references")]
    Empty,
}

/// All possible errors in the simulator.
///
/// The first two variants are user-facing and stop an invocation before any
/// run starts. The pool variants are returned by [`FramePool`] when a caller
/// breaks its contract; the runner turns those into
/// [`Error::InvariantViolation`] because they can only come from a faulty
/// policy.
///
/// [`FramePool`]: crate::buffer::FramePool
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The trace file is unreadable or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputErrorKind),

    /// The frame count is not a positive integer.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Insert into a pool that already holds `capacity` pages.
    #[error("frame pool is full ({capacity} frames)")]
    Capacity { capacity: usize },

    /// Evict a page that is not resident.
    #[error("page {0} is not resident")]
    NotResident(PageId),

    /// Insert a page that is already resident.
    #[error("page {0} is already resident")]
    AlreadyResident(PageId),

    /// A replacement policy broke its contract.
    ///
    /// This indicates a bug, not bad input.
    #[error("invariant violated during {algorithm} run at position {position}: {detail}")]
    InvariantViolation {
        algorithm: &'static str,
        position: usize,
        detail: String,
    },

    /// Writing a report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
