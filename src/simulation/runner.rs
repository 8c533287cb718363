//! Simulation Runner - replays a trace through one policy.
//!
//! Per reference `p` at position `i`:
//! 1. `p` resident: record a hit.
//! 2. Otherwise record a fault. If the pool is full, ask the replacer for a
//!    victim and evict it. Then load `p`.
//!
//! The replacer sees every access after the pool has been updated. Each run
//! owns a fresh [`FramePool`] and replacer and drops both when it finishes.

use std::thread;

use log::{debug, info};

use crate::buffer::replacer::{AccessKind, Replacer};
use crate::buffer::{FramePool, RunStats};
use crate::common::{Error, Result, SimulationConfig};
use crate::simulation::{AccessEvent, Algorithm, Outcome, RunResult};
use crate::trace::{ReferenceIndex, Trace};

/// Drives a trace through the replacement policies.
///
/// The trace is borrowed read-only and may be shared by concurrent runs,
/// together with the next-use index built from it on construction.
///
/// # Usage
/// ```
/// use vmsim::{Algorithm, FrameCount, SimulationConfig, Simulator, Trace};
///
/// let trace = Trace::from(vec![1, 2, 3, 1, 2, 4]);
/// let config = SimulationConfig::new(FrameCount::new(3).unwrap());
///
/// let result = Simulator::new(&trace, config).run(Algorithm::Lru).unwrap();
/// assert_eq!(result.faults(), 4);
/// assert_eq!(result.hits(), 2);
/// ```
pub struct Simulator<'t> {
    trace: &'t Trace,
    index: ReferenceIndex,
    config: SimulationConfig,
}

impl<'t> Simulator<'t> {
    pub fn new(trace: &'t Trace, config: SimulationConfig) -> Self {
        Self {
            trace,
            index: ReferenceIndex::new(trace),
            config,
        }
    }

    /// Run a single algorithm with a fresh pool and replacer.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` if the policy names a page that is not
    ///   resident or offers no victim for a full pool
    pub fn run(&self, algorithm: Algorithm) -> Result<RunResult> {
        let mut replacer = algorithm.replacer();
        self.run_with_replacer(algorithm, replacer.as_mut())
    }

    /// Run all three algorithms and return their results in report order
    /// (FIFO, LRU, Optimal).
    ///
    /// Every run is attempted even if another fails. If any run fails the
    /// first error in report order is returned, since a report needs all
    /// three sections.
    pub fn run_all(&self) -> Result<Vec<RunResult>> {
        let outcomes: Vec<Result<RunResult>> = if self.config.parallel {
            thread::scope(|scope| {
                let handles: Vec<_> = Algorithm::ALL
                    .iter()
                    .map(|&algorithm| (algorithm, scope.spawn(move || self.run(algorithm))))
                    .collect();

                handles
                    .into_iter()
                    .map(|(algorithm, handle)| {
                        handle.join().unwrap_or_else(|_| {
                            Err(Error::InvariantViolation {
                                algorithm: algorithm.name(),
                                position: 0,
                                detail: "run panicked".to_string(),
                            })
                        })
                    })
                    .collect()
            })
        } else {
            Algorithm::ALL.iter().map(|&a| self.run(a)).collect()
        };

        for outcome in &outcomes {
            if let Err(e) = outcome {
                debug!("run failed: {e}");
            }
        }
        outcomes.into_iter().collect()
    }

    /// Run `algorithm` using the given replacer instead of a fresh one.
    ///
    /// `algorithm` only labels the result and any error.
    pub fn run_with_replacer(
        &self,
        algorithm: Algorithm,
        replacer: &mut dyn Replacer,
    ) -> Result<RunResult> {
        let mut pool = FramePool::with_frame_count(self.config.frame_count);
        let mut stats = RunStats::new();
        let mut events = Vec::with_capacity(self.trace.len());

        for (position, page) in self.trace.iter().enumerate() {
            let violation = |detail: String| Error::InvariantViolation {
                algorithm: algorithm.name(),
                position,
                detail,
            };

            let outcome = if pool.contains(page) {
                stats.hits += 1;
                replacer.record_access(page, AccessKind::Hit);
                Outcome::Hit
            } else {
                stats.faults += 1;

                let evicted = if pool.is_full() {
                    let victim = replacer
                        .evict(&pool, self.index.at(position))
                        .ok_or_else(|| violation("no victim offered for a full pool".into()))?;
                    pool.evict(&victim)
                        .map_err(|e| violation(format!("victim rejected: {e}")))?;
                    stats.evictions += 1;
                    debug!("{algorithm}: page {page} replaces {victim} at position {position}");
                    Some(victim)
                } else {
                    None
                };

                pool.insert(page.clone())
                    .map_err(|e| violation(format!("insert failed: {e}")))?;
                replacer.record_access(page, AccessKind::Fault);
                Outcome::Fault { evicted }
            };

            events.push(AccessEvent {
                position,
                page: page.clone(),
                outcome,
                frames: self.config.record_frames.then(|| pool.snapshot()),
            });
        }

        info!(
            "{algorithm}: {} references, {} faults, {} hits",
            stats.total_references(),
            stats.faults,
            stats.hits
        );

        Ok(RunResult {
            algorithm,
            frame_count: self.config.frame_count,
            events,
            stats,
        })
    }
}
