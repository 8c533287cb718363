//! Frame management.
//!
//! The frame pool is the simulated physical memory: a fixed number of frames,
//! each holding one page. Which page leaves when a new one arrives is decided
//! by a replacer.
//!
//! # Components
//! - [`FramePool`] - Resident set with a fixed capacity
//! - [`RunStats`] - Fault/hit counters of one run
//! - [`replacer`] - Eviction policy implementations

mod frame_pool;
pub mod replacer;
mod stats;

pub use frame_pool::FramePool;
pub use stats::RunStats;
