//! Error types for the cache simulator.

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Every error is local and deterministic: nothing here is transient, so
/// callers never need to retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range (zero capacity, zero key space,
    /// locality parameters outside `[0, 1]`).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Policy name outside `{fifo, lru, lfu}`.
    #[error("unknown eviction policy: {0:?} (expected fifo, lru or lfu)")]
    InvalidPolicy(String),

    /// `step()` was called with no unprocessed trace entries left.
    ///
    /// Recoverable: stop stepping, or call `reset()`/`generate()`.
    #[error("trace exhausted at position {pointer} of {len}")]
    ExhaustedTrace { pointer: usize, len: usize },

    /// An internal cache invariant does not hold.
    ///
    /// Only produced by `check_invariants`; seeing it indicates a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Configuration JSON could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ExhaustedTrace { pointer: 4, len: 4 };
        assert_eq!(format!("{}", err), "trace exhausted at position 4 of 4");

        let err = Error::InvalidPolicy("mru".into());
        assert_eq!(
            format!("{}", err),
            "unknown eviction policy: \"mru\" (expected fifo, lru or lfu)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();

        match err {
            Error::ConfigParse(_) => {} // Success
            _ => panic!("Expected ConfigParse error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
