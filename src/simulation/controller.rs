//! Simulation Controller - owns one session from trace generation to replay.

use tracing::debug;

use crate::cache::{CacheSimulator, EvictionPolicy, StatsSnapshot, StepOutcome, Timeline};
use crate::common::{Key, Result, SimConfig};
use crate::trace::{Trace, TraceGenerator};

/// Lifecycle state of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No trace loaded yet.
    Idle,
    /// A trace is loaded; the pointer may be anywhere in `0..=len`.
    Active,
}

/// A single simulation session.
///
/// All session state (trace, cache contents, metadata, counters, timeline,
/// pointer) lives here, so independent sessions never share anything.
///
/// ```text
///            generate()               step() / reset() / set_policy()
///   Idle ───────────────▶ Active ◀──────────────────────┐
///                           │                           │
///                           └───────────────────────────┘
/// ```
///
/// Playback is left to the caller: stepping on a timer, or
/// [`run_to_end`](Simulation::run_to_end) for a whole run at once.
///
/// # Example
/// ```
/// use cachesim::{EvictionPolicy, SimConfig, Simulation};
///
/// let config = SimConfig::default()
///     .with_capacity(3)
///     .with_length(30)
///     .with_policy(EvictionPolicy::Lfu)
///     .with_seed(42);
///
/// let mut sim = Simulation::new(config).unwrap();
/// sim.generate().unwrap();
///
/// while !sim.is_finished() {
///     let outcome = sim.step().unwrap();
///     println!("{} -> {:?}", outcome.key, outcome.result);
/// }
///
/// let stats = sim.stats();
/// assert_eq!(stats.hits + stats.misses, 30);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    generator: TraceGenerator,
    trace: Trace,
    cache: CacheSimulator,
    state: SessionState,
}

impl Simulation {
    /// Create an idle session.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if the configuration does not validate
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            generator: TraceGenerator::new(config.locality),
            cache: CacheSimulator::new(config.capacity)?,
            trace: Trace::default(),
            state: SessionState::Idle,
            config,
        })
    }

    // ========================================================================
    // Public API: Lifecycle
    // ========================================================================

    /// Generate a new trace from the current configuration and start over.
    ///
    /// With a seed configured, every call produces the same trace.
    pub fn generate(&mut self) -> Result<&Trace> {
        let trace = match self.config.seed {
            Some(seed) => {
                self.generator
                    .generate_seeded(self.config.length, self.config.key_space_max, seed)
            }
            None => self
                .generator
                .generate_random(self.config.length, self.config.key_space_max),
        };

        debug!(
            length = trace.len(),
            key_space_max = self.config.key_space_max,
            capacity = self.config.capacity,
            policy = %self.config.policy,
            "generated trace"
        );

        self.load_trace(trace);
        Ok(&self.trace)
    }

    /// Replace the configuration, then [`generate`](Simulation::generate).
    ///
    /// On error the previous session is left untouched.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `config` does not validate
    pub fn generate_with(&mut self, config: SimConfig) -> Result<&Trace> {
        config.validate()?;

        if config.capacity != self.cache.capacity() {
            self.cache = CacheSimulator::new(config.capacity)?;
        }
        self.generator = TraceGenerator::new(config.locality);
        self.config = config;

        self.generate()
    }

    /// Start a session on a caller-supplied trace.
    pub fn load_trace(&mut self, trace: Trace) {
        self.trace = trace;
        self.cache.reset();
        self.state = SessionState::Active;
    }

    /// Process the next trace entry under the current policy.
    ///
    /// # Errors
    /// - `Error::ExhaustedTrace` once every entry has been processed (or no
    ///   trace is loaded). Nothing changes, so repeated calls are safe.
    pub fn step(&mut self) -> Result<StepOutcome> {
        self.cache.step(&self.trace, self.config.policy)
    }

    /// Step until the trace is exhausted; returns the number of steps taken.
    pub fn run_to_end(&mut self) -> usize {
        let mut steps = 0;
        while self.step().is_ok() {
            steps += 1;
        }
        steps
    }

    /// Rewind to the start of the current trace, clearing cache and counters.
    pub fn reset(&mut self) {
        debug!(length = self.trace.len(), "reset simulation");
        self.cache.reset();
    }

    /// Switch eviction policy without resetting the session.
    ///
    /// Metadata is shared by all policies, so the next eviction simply ranks
    /// the current residents by the new policy.
    pub fn set_policy(&mut self, policy: EvictionPolicy) {
        if policy != self.config.policy {
            debug!(from = %self.config.policy, to = %policy, "switched eviction policy");
            self.config.policy = policy;
        }
    }

    // ========================================================================
    // Public API: Read accessors
    // ========================================================================

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.config.policy
    }

    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Index of the next unprocessed trace entry.
    pub fn pointer(&self) -> usize {
        self.cache.pointer()
    }

    /// Trace entries not yet processed.
    pub fn remaining(&self) -> usize {
        self.trace.len().saturating_sub(self.cache.pointer())
    }

    pub fn is_finished(&self) -> bool {
        self.cache.is_finished(&self.trace)
    }

    /// Resident keys in admission order.
    pub fn resident(&self) -> &[Key] {
        self.cache.resident()
    }

    /// `capacity` slots for fixed-size display; empty slots are `None`.
    pub fn slots(&self) -> Vec<Option<Key>> {
        self.cache.slots()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.cache.stats()
    }

    pub fn timeline(&self) -> &Timeline {
        self.cache.timeline()
    }

    pub fn last_outcome(&self) -> Option<&StepOutcome> {
        self.cache.timeline().last()
    }

    /// The underlying cache, for metadata inspection.
    pub fn cache(&self) -> &CacheSimulator {
        &self.cache
    }
}
