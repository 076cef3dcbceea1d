//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts keys in the order they were admitted. Hits do not change the
//! order; a key that is evicted and comes back is treated as new.

use crate::cache::meta::MetaTable;
use crate::common::Key;

/// Resident key with the smallest `insert_order`.
pub fn select_victim(resident: &[Key], meta: &MetaTable) -> Option<Key> {
    super::ranked(resident, meta)
        .min_by_key(|(_, m)| m.insert_order)
        .map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::super::test_util::table;
    use super::*;

    #[test]
    fn test_fifo_oldest_admission() {
        let (resident, meta) = table(&[(7, 4, 9, 3), (8, 2, 2, 1), (9, 5, 5, 1)]);
        assert_eq!(select_victim(&resident, &meta), Some(Key::new(8)));
    }

    #[test]
    fn test_fifo_ignores_reaccess() {
        // Key 1 was admitted first; being hit later does not save it.
        let (resident, meta) = table(&[(1, 0, 10, 6), (2, 1, 1, 1)]);
        assert_eq!(select_victim(&resident, &meta), Some(Key::new(1)));
    }

    #[test]
    fn test_fifo_tie_goes_to_first_resident() {
        let (resident, meta) = table(&[(3, 2, 2, 1), (4, 2, 2, 1)]);
        assert_eq!(select_victim(&resident, &meta), Some(Key::new(3)));
    }
}
