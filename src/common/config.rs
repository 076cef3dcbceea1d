//! Simulation configuration.
//!
//! A [`SimConfig`] describes one session: cache size, key space, trace
//! length, eviction policy and trace locality. It can be built in code or
//! deserialized from JSON; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::cache::replacer::EvictionPolicy;
use crate::common::{Error, Result};

/// Default number of cache slots.
pub const DEFAULT_CAPACITY: usize = 4;

/// Default upper bound of the generated key range `[1, key_space_max]`.
pub const DEFAULT_KEY_SPACE_MAX: u32 = 12;

/// Default number of accesses in a generated trace.
pub const DEFAULT_TRACE_LENGTH: usize = 40;

/// Default probability that a new access reuses a hot key.
pub const DEFAULT_HOT_PROBABILITY: f64 = 0.62;

/// Default share of the trace prefix that forms the hot subset.
pub const DEFAULT_HOT_FRACTION: f64 = 0.35;

/// Locality knobs for the trace generator.
///
/// With probability `hot_probability` a new access repeats a key drawn from
/// the first `max(1, floor(hot_fraction * len))` entries generated so far;
/// otherwise a fresh uniform key is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locality {
    pub hot_probability: f64,
    pub hot_fraction: f64,
}

impl Locality {
    /// Check that both knobs are usable probabilities.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.hot_probability) {
            return Err(Error::InvalidConfig(format!(
                "hot_probability must be within [0, 1], got {}",
                self.hot_probability
            )));
        }
        if !(self.hot_fraction > 0.0 && self.hot_fraction <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "hot_fraction must be within (0, 1], got {}",
                self.hot_fraction
            )));
        }
        Ok(())
    }
}

impl Default for Locality {
    fn default() -> Self {
        Self {
            hot_probability: DEFAULT_HOT_PROBABILITY,
            hot_fraction: DEFAULT_HOT_FRACTION,
        }
    }
}

/// Configuration for one simulation session.
///
/// # Example
/// ```
/// use cachesim::{EvictionPolicy, SimConfig};
///
/// let json = r#"{ "capacity": 3, "policy": "lfu", "seed": 7 }"#;
/// let config = SimConfig::from_json(json).unwrap();
///
/// assert_eq!(config.capacity, 3);
/// assert_eq!(config.policy, EvictionPolicy::Lfu);
/// assert_eq!(config.length, 40); // default
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of cache slots. Must be positive.
    pub capacity: usize,

    /// Largest key the generator may emit. Must be positive.
    pub key_space_max: u32,

    /// Number of accesses in the trace. Zero is allowed.
    pub length: usize,

    /// Eviction policy used when the cache is full.
    pub policy: EvictionPolicy,

    /// Seed for reproducible traces; `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Trace locality knobs.
    pub locality: Locality,
}

impl SimConfig {
    /// Parse a configuration from JSON, then validate it.
    ///
    /// # Errors
    /// - `Error::ConfigParse` if the JSON is malformed or a policy name is unknown
    /// - `Error::InvalidConfig` if a value is out of range
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulator cannot run with.
    ///
    /// Nothing is coerced: a zero capacity is an error, not a cache of one.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidConfig("capacity must be positive".into()));
        }
        if self.key_space_max == 0 {
            return Err(Error::InvalidConfig(
                "key_space_max must be positive".into(),
            ));
        }
        self.locality.validate()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_key_space_max(mut self, key_space_max: u32) -> Self {
        self.key_space_max = key_space_max;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_policy(mut self, policy: EvictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the policy from its name (`"fifo"`, `"lru"` or `"lfu"`).
    ///
    /// # Errors
    /// - `Error::InvalidPolicy` for any other name
    pub fn with_policy_name(self, name: &str) -> Result<Self> {
        Ok(self.with_policy(name.parse()?))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_locality(mut self, locality: Locality) -> Self {
        self.locality = locality;
        self
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            key_space_max: DEFAULT_KEY_SPACE_MAX,
            length: DEFAULT_TRACE_LENGTH,
            policy: EvictionPolicy::default(),
            seed: None,
            locality: Locality::default(),
        }
    }
}
