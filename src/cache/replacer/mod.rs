//! Eviction policies (replacers).
//!
//! Each policy is a pure function from the resident keys (in admission
//! order) and their [`KeyMeta`](crate::cache::KeyMeta) to a victim:
//! - [`fifo`] - oldest admission
//! - [`lru`] - oldest access
//! - [`lfu`] - fewest accesses, ties broken by oldest access
//!
//! Ties always go to the key encountered first in resident order, so the
//! resident list must keep insertion order.

pub mod fifo;
pub mod lfu;
pub mod lru;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cache::meta::{KeyMeta, MetaTable};
use crate::common::{Error, Key};

/// The closed set of supported eviction policies.
///
/// Parse from a name with [`str::parse`]; unknown names are rejected rather
/// than mapped to a default.
///
/// # Example
/// ```
/// use cachesim::EvictionPolicy;
///
/// let policy: EvictionPolicy = "lfu".parse().unwrap();
/// assert_eq!(policy, EvictionPolicy::Lfu);
/// assert!("clock".parse::<EvictionPolicy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// First In First Out: evict the key admitted earliest.
    Fifo,
    /// Least Recently Used: evict the key accessed longest ago.
    #[default]
    Lru,
    /// Least Frequently Used: evict the key with the fewest accesses since
    /// admission; among equals, the least recently used.
    Lfu,
}

impl EvictionPolicy {
    /// All policies, in display order.
    pub const ALL: [EvictionPolicy; 3] = [Self::Fifo, Self::Lru, Self::Lfu];

    /// Lowercase name, as accepted by `parse`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Lru => "lru",
            Self::Lfu => "lfu",
        }
    }

    /// Pick the key to evict from `resident`.
    ///
    /// Returns `None` only when no resident key has metadata, which cannot
    /// happen for a non-empty cache.
    pub fn select_victim(self, resident: &[Key], meta: &MetaTable) -> Option<Key> {
        match self {
            Self::Fifo => fifo::select_victim(resident, meta),
            Self::Lru => lru::select_victim(resident, meta),
            Self::Lfu => lfu::select_victim(resident, meta),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lru" => Ok(Self::Lru),
            "lfu" => Ok(Self::Lfu),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resident keys paired with their metadata, in resident order.
fn ranked<'a>(
    resident: &'a [Key],
    meta: &'a MetaTable,
) -> impl Iterator<Item = (Key, &'a KeyMeta)> + 'a {
    resident
        .iter()
        .filter_map(move |key| meta.get(key).map(|m| (*key, m)))
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::cache::meta::{KeyMeta, MetaTable};
    use crate::common::Key;

    /// Build `(resident, meta)` from `(key, insert_order, last_used, freq)` rows.
    pub fn table(rows: &[(u32, usize, usize, u64)]) -> (Vec<Key>, MetaTable) {
        let resident = rows.iter().map(|r| Key::new(r.0)).collect();
        let meta = rows
            .iter()
            .map(|&(key, insert_order, last_used, freq)| {
                (
                    Key::new(key),
                    KeyMeta {
                        insert_order,
                        last_used,
                        freq,
                    },
                )
            })
            .collect();
        (resident, meta)
    }
}
