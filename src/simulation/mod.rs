//! Session lifecycle.
//!
//! - [`Simulation`] - Owns the trace and the cache for one session
//! - [`SessionState`] - Idle / Active

mod controller;

pub use controller::{SessionState, Simulation};
