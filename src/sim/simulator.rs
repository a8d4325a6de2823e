//! The simulation engine: shared hit/fault loop over a reference string.

use crate::common::{Error, PageId, Result};
use crate::sim::policy::{FrameSet, Policy};
use crate::sim::stats::RunStats;
use crate::sim::trace::Trace;

/// Everything one policy run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Per-reference sequence: the loaded page on a fault, a gap on a hit.
    pub trace: Trace,

    /// Fault/hit counters; `stats.hit_ratio()` derives the hit ratio.
    pub stats: RunStats,
}

/// Replays a page reference string against a fixed number of frames.
///
/// The reference string and capacity are validated once at construction
/// and immutable afterwards, so every policy sees identical input. Each
/// [`run`] builds fresh per-run state (frame set, trace, counters) and
/// returns it by value; nothing carries over between invocations.
///
/// # Example
/// ```
/// use pagesim::{PageId, Policy, Simulator};
///
/// let refs: Vec<PageId> = [7, 0, 1, 2, 0].iter().map(|&p| PageId::new(p)).collect();
/// let sim = Simulator::new(refs, 3).unwrap();
///
/// let result = sim.run(Policy::Fifo);
/// assert_eq!(result.stats.faults, 4);
/// assert_eq!(result.stats.hits, 1);
/// ```
///
/// [`run`]: Simulator::run
#[derive(Debug, Clone)]
pub struct Simulator {
    /// The ordered page accesses to replay. Read-only to all policies.
    references: Vec<PageId>,

    /// Number of frames available to the run. Fixed for the simulator's
    /// lifetime.
    capacity: usize,
}

impl Simulator {
    /// Create a simulator for `references` with `capacity` frames.
    ///
    /// # Errors
    /// - [`Error::InvalidCapacity`] if `capacity` is 0
    /// - [`Error::EmptyReferenceString`] if `references` is empty
    pub fn new(references: Vec<PageId>, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        if references.is_empty() {
            return Err(Error::EmptyReferenceString);
        }

        Ok(Self {
            references,
            capacity,
        })
    }

    /// The reference string being replayed.
    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    /// The frame capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replay the reference string under `policy`.
    ///
    /// For each reference in order: a resident page counts as a hit (LRU
    /// additionally refreshes its recency); anything else counts as a
    /// fault, evicting per the policy's rule once the frames are full and
    /// then loading the page. Performs no I/O and touches no shared state,
    /// so concurrent runs on the same simulator need no coordination.
    pub fn run(&self, policy: Policy) -> RunResult {
        let mut frames = FrameSet::new(policy, self.capacity);
        let mut trace = Trace::with_capacity(self.references.len());
        let mut stats = RunStats::default();

        for (pos, &page) in self.references.iter().enumerate() {
            if frames.contains(page) {
                stats.hits += 1;
                trace.record_hit();
                frames.record_hit(page);
            } else {
                stats.faults += 1;
                trace.record_fault(page);
                let _evicted = frames.load(page, pos, &self.references);
            }

            debug_assert!(frames.len() <= self.capacity);
        }

        RunResult { trace, stats }
    }

    /// Run every policy, in the fixed order of [`Policy::ALL`].
    pub fn run_all(&self) -> [(Policy, RunResult); 4] {
        Policy::ALL.map(|policy| (policy, self.run(policy)))
    }
}
