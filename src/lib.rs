//! pagesim - a simulator for memory-page replacement policies.
//!
//! Given a reference string (the ordered page accesses of a workload) and a
//! fixed number of frames, the simulator replays the workload under each of
//! four classic eviction policies and reports the exact fault/hit sequence
//! plus the resulting hit ratio.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        Simulator                           │
//! │    references: Vec<PageId>       capacity: usize           │
//! │                                                            │
//! │    run(policy) ──▶ shared hit/fault loop                   │
//! │                         │                                  │
//! │   ┌──────────────────────────────────────────────────┐     │
//! │   │   FrameSet:  FIFO │ Optimal │ LRU │ Clock        │     │
//! │   │        (one eviction rule per policy)            │     │
//! │   └──────────────────────────────────────────────────┘     │
//! │                         │                                  │
//! │                         ▼                                  │
//! │           RunResult { Trace, RunStats }                    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, Result)
//! - [`sim`] - The simulation engine and the four eviction policies
//!
//! # Quick Start
//! ```
//! use pagesim::{PageId, Policy, Simulator};
//!
//! let refs = vec![PageId::new(1), PageId::new(2), PageId::new(1)];
//! let sim = Simulator::new(refs, 2).unwrap();
//!
//! let result = sim.run(Policy::Lru);
//! assert_eq!(result.stats.faults, 2);
//! assert_eq!(result.stats.hits, 1);
//! ```
//!
//! Every `run` builds its frame table, trace and counters from scratch, so a
//! result is fully determined by the reference string, the capacity and the
//! chosen policy. Runs never share state; a `&Simulator` can drive all four
//! policies from different threads without coordination.

pub mod common;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};
pub use sim::{Policy, RunResult, RunStats, Simulator, Trace};
