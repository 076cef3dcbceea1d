//! cachesim - A step-by-step cache simulator for comparing eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            cachesim                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulation Controller (simulation/)           │   │
//! │  │        generate → step* → reset, policy switching       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ↓                              ↓                │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │   Trace Layer (trace/)   │  │    Cache Layer (cache/)  │    │
//! │  │  TraceGenerator → Trace  │─▶│  CacheSimulator + stats  │    │
//! │  │   (tunable locality)     │  │  + timeline + replacer   │    │
//! │  └──────────────────────────┘  │   FIFO | LRU | LFU       │    │
//! │                                └──────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering and playback timing are left to the caller: read the trace,
//! slots, stats and timeline after each [`Simulation::step`].
//!
//! # Modules
//! - [`common`] - Shared primitives (Key, SimConfig, Error)
//! - [`trace`] - Traces and trace generation
//! - [`cache`] - The cache state machine, metrics and eviction policies
//! - [`simulation`] - Session lifecycle
//!
//! # Quick Start
//! ```
//! use cachesim::{EvictionPolicy, Simulation, SimConfig, Trace};
//!
//! let mut sim = Simulation::new(SimConfig::default().with_capacity(2)).unwrap();
//! sim.load_trace(Trace::from_keys([1, 2, 1, 3]));
//! sim.set_policy(EvictionPolicy::Lru);
//! sim.run_to_end();
//!
//! assert_eq!(sim.stats().hits, 1);
//! assert_eq!(sim.timeline().summary(), "Steps: 4  Hit 1 / Miss 3");
//! ```

pub mod cache;
pub mod common;
pub mod simulation;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Key, Locality, Result, SimConfig};

pub use cache::{
    AccessResult, CacheSimulator, CacheStats, EvictionPolicy, KeyMeta, StatsSnapshot,
    StepOutcome, Timeline,
};
pub use simulation::{SessionState, Simulation};
pub use trace::{Trace, TraceGenerator};
