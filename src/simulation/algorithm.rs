//! The replacement algorithms a simulation can run.

use std::fmt;

use crate::buffer::replacer::{FifoReplacer, LruReplacer, OptimalReplacer, Replacer};

/// One of the three supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Fifo,
    Lru,
    Optimal,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Fifo, Algorithm::Lru, Algorithm::Optimal];

    /// Name used in section banners and summary lines.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "FIFO",
            Algorithm::Lru => "LRU",
            Algorithm::Optimal => "Optimal",
        }
    }

    /// A fresh replacer with empty bookkeeping.
    pub fn replacer(&self) -> Box<dyn Replacer> {
        match self {
            Algorithm::Fifo => Box::new(FifoReplacer::new()),
            Algorithm::Lru => Box::new(LruReplacer::new()),
            Algorithm::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
