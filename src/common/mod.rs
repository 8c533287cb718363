//! Common types and utilities shared across the simulator.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration (frame count, run options, report constants)
//! - Error types
//! - Identifiers (PageId, FrameId)

pub mod config;
pub mod error;
mod frame_id;
mod page_id;

pub use config::{FrameCount, SimulationConfig};
pub use error::{Error, InputErrorKind, Result};
pub use frame_id::FrameId;
pub use page_id::PageId;
