//! Access traces.
//!
//! # Components
//! - [`Trace`] - An immutable, ordered sequence of keys to replay
//! - [`TraceGenerator`] - Builds traces with tunable locality

mod generator;
#[allow(clippy::module_inception)]
mod trace;

pub use generator::TraceGenerator;
pub use trace::Trace;
