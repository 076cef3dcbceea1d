//! Common types shared across the simulator.
//!
//! This module contains the fundamental primitives used throughout the crate:
//! - Configuration ([`SimConfig`], [`Locality`])
//! - Error types
//! - The [`Key`] identifier

pub mod config;
pub mod error;
mod key;

pub use config::{Locality, SimConfig};
pub use error::{Error, Result};
pub use key::Key;
