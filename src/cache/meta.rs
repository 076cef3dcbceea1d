//! Per-key bookkeeping for resident keys.
//!
//! A [`KeyMeta`] exists for a key if and only if that key is resident.
//! Eviction drops the entry, so a key that comes back starts over.

use std::collections::HashMap;

use serde::Serialize;

use crate::common::Key;

/// Metadata table keyed by resident key.
pub type MetaTable = HashMap<Key, KeyMeta>;

/// Bookkeeping the eviction policies rank resident keys by.
///
/// All positions are trace indices, so they double as logical timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyMeta {
    /// Trace index at which the key was last admitted.
    pub insert_order: usize,

    /// Trace index of the last access (hit or admission).
    pub last_used: usize,

    /// Accesses since the last admission, counting the admission itself.
    pub freq: u64,
}

impl KeyMeta {
    /// Metadata for a key admitted at trace index `index`.
    #[inline]
    pub fn admitted(index: usize) -> Self {
        Self {
            insert_order: index,
            last_used: index,
            freq: 1,
        }
    }

    /// Record a hit at trace index `index`.
    #[inline]
    pub fn touch(&mut self, index: usize) {
        self.last_used = index;
        self.freq += 1;
    }
}
