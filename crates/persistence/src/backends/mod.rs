//! Storage backend implementations.
//!
//! - [`memory`] - in-process store, always available, used by tests.
//! - [`mongodb`] - MongoDB store, behind the `mongodb` feature (default).

pub mod memory;

#[cfg(feature = "mongodb")]
pub mod mongodb;
