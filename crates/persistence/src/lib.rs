//! # medibase-persistence - Repository Operations
//!
//! This crate provides the data-access layer for the Medibase hospital
//! records backend: one logical collection per entity kind, keyed by the
//! generated `id` field, with the CRUD surface described by the
//! [`RecordStore`] trait.
//!
//! ## Backends
//!
//! - `mongodb` (default feature) - [`backends::mongodb::MongoStore`], the
//!   production backend over one long-lived MongoDB client.
//! - memory (always available) - [`backends::memory::MemoryStore`], an
//!   in-process store used by tests and local experiments.
//!
//! ## Semantics
//!
//! - Records are looked up solely by their generated identity; the store's
//!   internal row identifier (`_id` in MongoDB) is never exposed.
//! - Full-table scans (`find_all`, `find_by_field`) are capped at
//!   [`SCAN_LIMIT`] entries and return records in stored order.
//! - `replace_fields` replaces every creation-shape field and nothing else,
//!   so identity and creation timestamp survive any update.
//! - `set_field` patches exactly one field and is implemented independently
//!   of `replace_fields`.
//! - Missing identities surface as [`StorageError::NotFound`] carrying the
//!   entity kind, so callers can produce kind-specific messages.
//!
//! No operation touches more than one document, and no multi-document
//! transactions are used; the store's per-document atomicity is the only
//! consistency guarantee.

#![warn(missing_docs)]

pub mod backends;
pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::{RecordStore, SCAN_LIMIT};

pub use backends::memory::MemoryStore;
#[cfg(feature = "mongodb")]
pub use backends::mongodb::MongoStore;
