//! Trace - the access pattern replayed by the simulator.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::common::Key;

/// An immutable, ordered sequence of keys, indexed `0..len`.
///
/// A trace is created once per session and never mutated; `reset()` replays
/// the same trace from the start.
///
/// # Example
/// ```
/// use cachesim::{Key, Trace};
///
/// let trace = Trace::from_keys([1, 2, 1, 3]);
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace.get(2), Some(Key::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    keys: Vec<Key>,
}

impl Trace {
    /// Wrap an existing key sequence.
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Build a trace from raw key values.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            keys: keys.into_iter().map(Key::new).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Key> {
        self.keys.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Key] {
        &self.keys
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().copied()
    }
}

impl Index<usize> for Trace {
    type Output = Key;

    fn index(&self, index: usize) -> &Key {
        &self.keys[index]
    }
}

impl From<Vec<Key>> for Trace {
    fn from(keys: Vec<Key>) -> Self {
        Self::new(keys)
    }
}
