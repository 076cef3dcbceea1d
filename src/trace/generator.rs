//! Synthetic trace generation with tunable locality.
//!
//! Traces are built one key at a time. Each new access either repeats a
//! key from the *hot subset* (the first `hot_fraction` of the keys generated
//! so far) or draws a fresh key uniformly from `[1, key_space_max]`. Keys
//! that appear early therefore keep coming back, which gives the eviction
//! policies something to disagree about.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{Key, Locality};
use crate::trace::Trace;

/// Builds [`Trace`]s with configurable locality.
///
/// # Example
/// ```
/// use cachesim::TraceGenerator;
///
/// let trace = TraceGenerator::default().generate_seeded(25, 8, 42);
/// assert_eq!(trace.len(), 25);
/// assert!(trace.iter().all(|k| (1..=8).contains(&k.0)));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceGenerator {
    locality: Locality,
}

impl TraceGenerator {
    pub fn new(locality: Locality) -> Self {
        Self { locality }
    }

    pub fn locality(&self) -> Locality {
        self.locality
    }

    /// Generate `length` keys in `[1, key_space_max]` using `rng`.
    ///
    /// A `length` of 0 yields an empty trace. `key_space_max` must be
    /// positive; the session config validates this before calling.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        key_space_max: u32,
    ) -> Trace {
        let mut keys: Vec<Key> = Vec::with_capacity(length);

        for _ in 0..length {
            let reuse = rng.random::<f64>() < self.locality.hot_probability;

            let key = if reuse && !keys.is_empty() {
                let hot_len = self.hot_len(keys.len());
                keys[rng.random_range(0..hot_len)]
            } else {
                Key::new(rng.random_range(1..=key_space_max))
            };

            keys.push(key);
        }

        Trace::new(keys)
    }

    /// Generate a reproducible trace from `seed`.
    pub fn generate_seeded(&self, length: usize, key_space_max: u32, seed: u64) -> Trace {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng, length, key_space_max)
    }

    /// Generate a trace seeded from the operating system.
    pub fn generate_random(&self, length: usize, key_space_max: u32) -> Trace {
        let mut rng = SmallRng::from_os_rng();
        self.generate(&mut rng, length, key_space_max)
    }

    /// Size of the hot prefix for a sequence of `current_len` keys.
    ///
    /// Never less than 1 and never more than `current_len` (for non-empty
    /// sequences).
    fn hot_len(&self, current_len: usize) -> usize {
        let hot = (self.locality.hot_fraction * current_len as f64).floor() as usize;
        hot.clamp(1, current_len.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_length_zero() {
        let trace = TraceGenerator::default().generate_seeded(0, 10, 1);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_keys_within_bounds() {
        let trace = TraceGenerator::default().generate_seeded(500, 16, 7);
        assert_eq!(trace.len(), 500);
        assert!(trace.iter().all(|k| k.0 >= 1 && k.0 <= 16));
    }

    #[test]
    fn test_single_key_space() {
        let trace = TraceGenerator::default().generate_seeded(20, 1, 3);
        assert!(trace.iter().all(|k| k == Key::new(1)));
    }

    #[test]
    fn test_same_seed_same_trace() {
        let gen = TraceGenerator::default();
        assert_eq!(gen.generate_seeded(64, 100, 9), gen.generate_seeded(64, 100, 9));
    }

    #[test]
    fn test_always_hot_repeats_first_key() {
        // With reuse forced and a tiny hot fraction, the hot prefix stays at
        // one element, so every access repeats the first key.
        let gen = TraceGenerator::new(Locality {
            hot_probability: 1.0,
            hot_fraction: 0.01,
        });
        let trace = gen.generate_seeded(50, 1000, 11);
        let first = trace[0];
        assert!(trace.iter().all(|k| k == first));
    }

    #[test]
    fn test_never_hot_reuses_only_by_chance() {
        let gen = TraceGenerator::new(Locality {
            hot_probability: 0.0,
            hot_fraction: 0.35,
        });
        // Huge key space: collisions are vanishingly unlikely.
        let trace = gen.generate_seeded(200, u32::MAX, 5);
        let distinct: HashSet<Key> = trace.iter().collect();
        assert!(distinct.len() > 190);
    }

    #[test]
    fn test_locality_concentrates_keys() {
        let hot = TraceGenerator::default().generate_seeded(400, 1000, 21);
        let cold = TraceGenerator::new(Locality {
            hot_probability: 0.0,
            ..Locality::default()
        })
        .generate_seeded(400, 1000, 21);

        let hot_distinct = hot.iter().collect::<HashSet<_>>().len();
        let cold_distinct = cold.iter().collect::<HashSet<_>>().len();
        assert!(hot_distinct < cold_distinct);
    }

    #[test]
    fn test_hot_len() {
        let gen = TraceGenerator::default();
        assert_eq!(gen.hot_len(1), 1);
        assert_eq!(gen.hot_len(2), 1);
        assert_eq!(gen.hot_len(10), 3);
        assert_eq!(gen.hot_len(100), 35);
    }
}
