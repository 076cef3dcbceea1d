//! LFU (Least Frequently Used) replacement policy.
//!
//! Frequency counts accesses since admission, so a key that was evicted
//! and re-admitted starts again at 1. Equal frequencies fall back to
//! recency: the least recently used of them goes.

use crate::cache::meta::MetaTable;
use crate::common::Key;

/// Resident key with the smallest `(freq, last_used)`.
pub fn select_victim(resident: &[Key], meta: &MetaTable) -> Option<Key> {
    super::ranked(resident, meta)
        .min_by_key(|(_, m)| (m.freq, m.last_used))
        .map(|(key, _)| key)
}
