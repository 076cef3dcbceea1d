//! Cache simulation.
//!
//! The cache is a fixed set of slots holding resident keys. Each trace
//! access is classified as a hit or a miss; misses on a full cache evict a
//! victim chosen by the active [`EvictionPolicy`].
//!
//! # Components
//! - [`CacheSimulator`] - The cache state machine
//! - [`KeyMeta`] - Per-key admission/recency/frequency bookkeeping
//! - [`CacheStats`] / [`StatsSnapshot`] - Hit, miss and eviction counters
//! - [`Timeline`] / [`StepOutcome`] - Per-step outcome log
//! - [`replacer`] - Eviction policy implementations

mod meta;
pub mod replacer;
mod simulator;
mod stats;
mod timeline;

pub use meta::{KeyMeta, MetaTable};
pub use replacer::EvictionPolicy;
pub use simulator::CacheSimulator;
pub use stats::{CacheStats, StatsSnapshot};
pub use timeline::{AccessResult, StepOutcome, Timeline};
