//! LRU (Least Recently Used) replacement policy.

use crate::cache::meta::MetaTable;
use crate::common::Key;

/// Resident key with the smallest `last_used`.
pub fn select_victim(resident: &[Key], meta: &MetaTable) -> Option<Key> {
    super::ranked(resident, meta)
        .min_by_key(|(_, m)| m.last_used)
        .map(|(key, _)| key)
}
