//! Cache key type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A synthetic memory address requested by the trace.
///
/// Keys are opaque: only equality and hashing matter to the simulator.
/// Generated keys lie in `[1, key_space_max]`, so `0` never appears in a
/// generated trace (it is still a legal key for hand-written traces).
///
/// # Example
/// ```
/// use cachesim::Key;
///
/// let key = Key::new(42);
/// assert_eq!(key.0, 42);
/// assert_eq!(key.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub u32);

impl Key {
    /// Create a new Key.
    #[inline]
    pub fn new(value: u32) -> Self {
        Key(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
