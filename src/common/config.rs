//! Configuration for a simulation invocation.

use std::fmt;
use std::num::NonZeroUsize;

use crate::common::{Error, Result};

/// Digits after the decimal point when printing a hit ratio.
///
/// Fixed so that identical inputs always produce identical report bytes.
pub const RATIO_PRECISION: usize = 4;

/// First line of the stdout report.
pub const REPORT_BANNER: &str = "==== Virtual Memory Manager ====";

/// First line of the file report.
pub const FILE_REPORT_BANNER: &str = "==== Virtual Memory Manager Report ====";

/// Width of the algorithm column in the stdout summary table.
///
/// Summary lines still start with the bare algorithm name; the padding sits
/// before the first `|`.
pub const SUMMARY_NAME_WIDTH: usize = 10;

/// Default file name used by `--report` when given a directory.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

/// Default file name used by `--csv` when given a directory.
pub const DEFAULT_CSV_FILE: &str = "results.csv";

/// Number of frames in the pool. Always at least one.
///
/// # Example
/// ```
/// use vmsim::FrameCount;
///
/// let frames = FrameCount::parse("3").unwrap();
/// assert_eq!(frames.get(), 3);
/// assert!(FrameCount::parse("0").is_err());
/// assert!(FrameCount::parse("-2").is_err());
/// assert!(FrameCount::parse("three").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameCount(NonZeroUsize);

impl FrameCount {
    /// Create a frame count, rejecting zero.
    pub fn new(frames: usize) -> Result<Self> {
        NonZeroUsize::new(frames).map(FrameCount).ok_or_else(|| {
            Error::InvalidConfiguration("frame count must be at least 1, got 0".to_string())
        })
    }

    /// Parse the frame count argument as given on the command line.
    ///
    /// Surrounding whitespace is ignored. Anything other than a positive
    /// decimal integer is an [`Error::InvalidConfiguration`].
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(Error::InvalidConfiguration(format!(
                "frame count must be positive, got {trimmed:?}"
            )));
        }
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidConfiguration(format!(
                "frame count must be a positive integer, got {trimmed:?}"
            )));
        }
        let frames = trimmed.parse::<usize>().map_err(|e| {
            Error::InvalidConfiguration(format!("frame count {trimmed:?} is out of range: {e}"))
        })?;
        Self::new(frames)
    }

    /// The frame count as a plain integer.
    #[inline]
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for FrameCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options for one invocation of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Size of every run's frame pool.
    pub frame_count: FrameCount,

    /// Record the frame contents after every reference (step mode).
    pub record_frames: bool,

    /// Run the three policies on separate threads.
    pub parallel: bool,
}

impl SimulationConfig {
    /// Configuration with step recording off and parallel runs on.
    pub fn new(frame_count: FrameCount) -> Self {
        Self {
            frame_count,
            record_frames: false,
            parallel: true,
        }
    }

    /// Enable or disable per-reference frame snapshots.
    pub fn with_record_frames(mut self, record_frames: bool) -> Self {
        self.record_frames = record_frames;
        self
    }

    /// Enable or disable parallel runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
