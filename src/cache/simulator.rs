//! Cache Simulator - the fixed-capacity cache state machine.
//!
//! The [`CacheSimulator`] provides:
//! - Hit/miss classification for each trace entry
//! - Admission into free slots, eviction through an [`EvictionPolicy`] when full
//! - Per-key metadata the policies rank by
//! - Counters and the per-step timeline

use tracing::{debug, trace};

use crate::cache::meta::{KeyMeta, MetaTable};
use crate::cache::replacer::EvictionPolicy;
use crate::cache::{AccessResult, CacheStats, StatsSnapshot, StepOutcome, Timeline};
use crate::common::{Error, Key, Result};
use crate::trace::Trace;

/// Replays a trace against a cache of `capacity` slots.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                     CacheSimulator                       │
/// │  ┌──────────────┐  ┌─────────────────────────────────┐   │
/// │  │  resident    │  │        meta: MetaTable          │   │
/// │  │  Vec<Key>    │─▶│  Key → {insert, last_used, freq}│   │
/// │  └──────────────┘  └─────────────────────────────────┘   │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐    │
/// │  │   pointer    │  │    stats     │  │   timeline   │    │
/// │  │ next index   │  │  CacheStats  │  │ StepOutcome* │    │
/// │  └──────────────┘  └──────────────┘  └──────────────┘    │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// # Invariants
/// - `resident.len() <= capacity`, no duplicates
/// - a key has a `meta` entry iff it is resident
/// - `hits + misses == pointer == timeline.len()`
///
/// The resident list keeps admission order (victims are removed in place,
/// new keys are appended), which is what policy tie-breaks depend on.
///
/// # Usage
/// ```
/// use cachesim::{CacheSimulator, EvictionPolicy, Trace};
///
/// let trace = Trace::from_keys([1, 2, 3, 4]);
/// let mut sim = CacheSimulator::new(2).unwrap();
///
/// while !sim.is_finished(&trace) {
///     sim.step(&trace, EvictionPolicy::Fifo).unwrap();
/// }
///
/// assert_eq!(sim.stats().evictions, 2);
/// ```
#[derive(Debug, Clone)]
pub struct CacheSimulator {
    /// Number of slots (immutable after construction).
    capacity: usize,

    /// Resident keys in admission order.
    resident: Vec<Key>,

    /// Metadata for every resident key.
    meta: MetaTable,

    /// Counters.
    stats: CacheStats,

    /// Outcome of every processed step.
    timeline: Timeline,

    /// Index of the next unprocessed trace entry.
    pointer: usize,
}

impl CacheSimulator {
    /// Create an empty simulator.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be positive".into()));
        }

        Ok(Self {
            capacity,
            resident: Vec::with_capacity(capacity),
            meta: MetaTable::with_capacity(capacity),
            stats: CacheStats::new(),
            timeline: Timeline::new(),
            pointer: 0,
        })
    }

    // ========================================================================
    // Public API: Stepping
    // ========================================================================

    /// Process the next entry of `trace` under `policy`.
    ///
    /// The policy is taken per call, so it can be switched between steps.
    ///
    /// # Errors
    /// - `Error::ExhaustedTrace` if every entry has been processed. State is
    ///   left untouched, so calling again is harmless.
    pub fn step(&mut self, trace: &Trace, policy: EvictionPolicy) -> Result<StepOutcome> {
        let index = self.pointer;
        let key = trace.get(index).ok_or(Error::ExhaustedTrace {
            pointer: index,
            len: trace.len(),
        })?;

        let outcome = if self.meta.contains_key(&key) {
            self.handle_hit(index, key)
        } else {
            self.handle_miss(index, key, policy)
        };

        trace!(
            index,
            key = %key,
            result = ?outcome.result,
            resident = self.resident.len(),
            "processed access"
        );

        self.timeline.push(outcome);
        self.pointer = index + 1;

        Ok(outcome)
    }

    /// Clear the cache, counters and timeline and rewind to index 0.
    pub fn reset(&mut self) {
        self.resident.clear();
        self.meta.clear();
        self.stats.reset();
        self.timeline.clear();
        self.pointer = 0;
    }

    // ========================================================================
    // Public API: Read accessors
    // ========================================================================

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the next unprocessed trace entry.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Whether every entry of `trace` has been processed.
    pub fn is_finished(&self, trace: &Trace) -> bool {
        self.pointer >= trace.len()
    }

    /// Resident keys in admission order.
    pub fn resident(&self) -> &[Key] {
        &self.resident
    }

    /// Exactly `capacity` slots: resident keys first, then `None` for
    /// empty slots.
    pub fn slots(&self) -> Vec<Option<Key>> {
        (0..self.capacity)
            .map(|i| self.resident.get(i).copied())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.resident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resident.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.resident.len() >= self.capacity
    }

    pub fn contains(&self, key: Key) -> bool {
        self.meta.contains_key(&key)
    }

    /// Metadata for `key`, if resident.
    pub fn meta(&self, key: Key) -> Option<&KeyMeta> {
        self.meta.get(&key)
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Verify the internal invariants.
    ///
    /// # Errors
    /// - `Error::InvariantViolation` describing the first broken invariant
    pub fn check_invariants(&self) -> Result<()> {
        if self.resident.len() > self.capacity {
            return Err(Error::InvariantViolation(format!(
                "{} resident keys exceed capacity {}",
                self.resident.len(),
                self.capacity
            )));
        }
        if self.meta.len() != self.resident.len() {
            return Err(Error::InvariantViolation(format!(
                "{} metadata entries for {} resident keys",
                self.meta.len(),
                self.resident.len()
            )));
        }
        if let Some(key) = self.resident.iter().find(|k| !self.meta.contains_key(*k)) {
            return Err(Error::InvariantViolation(format!(
                "resident key {} has no metadata",
                key
            )));
        }

        let stats = self.stats.snapshot();
        if stats.accesses() != self.pointer as u64 || self.timeline.len() != self.pointer {
            return Err(Error::InvariantViolation(format!(
                "pointer {} disagrees with {} accesses and {} timeline entries",
                self.pointer,
                stats.accesses(),
                self.timeline.len()
            )));
        }

        Ok(())
    }

    // ========================================================================
    // Internal: Hit and miss handling
    // ========================================================================

    fn handle_hit(&mut self, index: usize, key: Key) -> StepOutcome {
        if let Some(meta) = self.meta.get_mut(&key) {
            meta.touch(index);
        }
        self.stats.record_hit();

        StepOutcome {
            index,
            key,
            result: AccessResult::Hit,
            evicted: None,
        }
    }

    fn handle_miss(&mut self, index: usize, key: Key, policy: EvictionPolicy) -> StepOutcome {
        self.stats.record_miss();

        let evicted = if self.is_full() {
            Some(self.evict(key, policy))
        } else {
            None
        };

        self.resident.push(key);
        self.meta.insert(key, KeyMeta::admitted(index));

        StepOutcome {
            index,
            key,
            result: AccessResult::Miss,
            evicted,
        }
    }

    /// Remove the policy's victim to make room for `incoming`.
    fn evict(&mut self, incoming: Key, policy: EvictionPolicy) -> Key {
        // Only called when full, so `resident` is non-empty.
        let victim = policy
            .select_victim(&self.resident, &self.meta)
            .unwrap_or(self.resident[0]);

        self.resident.retain(|&k| k != victim);
        self.meta.remove(&victim);
        self.stats.record_eviction();

        debug!(victim = %victim, incoming = %incoming, %policy, "evicted key");

        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &[u32], capacity: usize, policy: EvictionPolicy) -> CacheSimulator {
        let trace = Trace::from_keys(keys.iter().copied());
        let mut sim = CacheSimulator::new(capacity).unwrap();
        while !sim.is_finished(&trace) {
            sim.step(&trace, policy).unwrap();
        }
        sim
    }

    fn resident(sim: &CacheSimulator) -> Vec<u32> {
        sim.resident().iter().map(|k| k.0).collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            CacheSimulator::new(0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_admit_without_eviction() {
        let sim = run(&[1, 2, 3], 4, EvictionPolicy::Lru);

        assert_eq!(resident(&sim), vec![1, 2, 3]);
        assert_eq!(sim.stats().misses, 3);
        assert_eq!(sim.stats().evictions, 0);
        assert!(!sim.is_full());
    }

    #[test]
    fn test_hit_updates_meta() {
        let sim = run(&[5, 6, 5, 5], 4, EvictionPolicy::Lru);

        let meta = sim.meta(Key::new(5)).unwrap();
        assert_eq!(meta.insert_order, 0);
        assert_eq!(meta.last_used, 3);
        assert_eq!(meta.freq, 3);
        assert_eq!(sim.stats().hits, 2);
    }

    #[test]
    fn test_fifo_trace() {
        let sim = run(&[1, 2, 3, 4], 2, EvictionPolicy::Fifo);

        assert_eq!(resident(&sim), vec![3, 4]);
        assert_eq!(sim.stats().evictions, 2);
        assert_eq!(sim.stats().misses, 4);
        assert_eq!(sim.stats().hits, 0);
    }

    #[test]
    fn test_lru_trace() {
        let sim = run(&[1, 2, 1, 3], 2, EvictionPolicy::Lru);

        assert_eq!(resident(&sim), vec![1, 3]);
        assert_eq!(sim.stats().hits, 1);
        assert_eq!(sim.stats().misses, 3);
        assert_eq!(sim.stats().evictions, 1);
        assert_eq!(sim.timeline().get(3).unwrap().evicted, Some(Key::new(2)));
    }

    #[test]
    fn test_fifo_evicts_hit_key() {
        // Same trace as LRU: FIFO throws out key 1 despite the hit.
        let sim = run(&[1, 2, 1, 3], 2, EvictionPolicy::Fifo);
        assert_eq!(resident(&sim), vec![2, 3]);
    }

    #[test]
    fn test_readmitted_key_starts_fresh() {
        let sim = run(&[1, 1, 1, 2, 3, 1], 2, EvictionPolicy::Fifo);

        // 1 is evicted at index 4, then re-admitted at 5 with freq 1.
        let meta = sim.meta(Key::new(1)).unwrap();
        assert_eq!(meta.insert_order, 5);
        assert_eq!(meta.freq, 1);
    }

    #[test]
    fn test_exhausted_is_harmless() {
        let trace = Trace::from_keys([1]);
        let mut sim = CacheSimulator::new(1).unwrap();
        sim.step(&trace, EvictionPolicy::Lru).unwrap();

        for _ in 0..3 {
            let err = sim.step(&trace, EvictionPolicy::Lru).unwrap_err();
            assert!(matches!(err, Error::ExhaustedTrace { pointer: 1, len: 1 }));
        }
        assert_eq!(sim.pointer(), 1);
        assert_eq!(sim.timeline().len(), 1);
        sim.check_invariants().unwrap();
    }

    #[test]
    fn test_slots() {
        let sim = run(&[9, 4], 3, EvictionPolicy::Lru);
        assert_eq!(sim.slots(), vec![Some(Key::new(9)), Some(Key::new(4)), None]);
    }

    #[test]
    fn test_reset() {
        let mut sim = run(&[1, 2, 3, 1], 2, EvictionPolicy::Lfu);
        sim.reset();

        assert!(sim.is_empty());
        assert_eq!(sim.pointer(), 0);
        assert_eq!(sim.stats(), StatsSnapshot::default());
        assert!(sim.timeline().is_empty());
        assert_eq!(sim.meta(Key::new(1)), None);
        sim.check_invariants().unwrap();
    }

    #[test]
    fn test_policy_switch_between_steps() {
        let trace = Trace::from_keys([1, 2, 1, 3]);
        let mut sim = CacheSimulator::new(2).unwrap();
        sim.step(&trace, EvictionPolicy::Lru).unwrap();
        sim.step(&trace, EvictionPolicy::Lru).unwrap();
        sim.step(&trace, EvictionPolicy::Lru).unwrap();

        // Switching to FIFO for the eviction picks the oldest admission.
        let outcome = sim.step(&trace, EvictionPolicy::Fifo).unwrap();
        assert_eq!(outcome.evicted, Some(Key::new(1)));
    }

    #[test]
    fn test_invariants_hold_every_step() {
        let trace = Trace::from_keys([3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9]);
        for policy in EvictionPolicy::ALL {
            let mut sim = CacheSimulator::new(3).unwrap();
            while !sim.is_finished(&trace) {
                sim.step(&trace, policy).unwrap();
                sim.check_invariants().unwrap();
            }
        }
    }
}
