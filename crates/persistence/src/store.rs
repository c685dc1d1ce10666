//! Core record storage trait.
//!
//! [`RecordStore`] defines the repository operations shared by every entity
//! kind. Backends implement it once; the generic methods are instantiated per
//! kind through the [`Record`] trait, so the kind's collection name and
//! shapes are resolved at compile time.

use async_trait::async_trait;

use medibase_model::{EntityKind, Record};

use crate::error::StorageResult;

/// Upper bound on the number of records returned by a full-collection scan.
pub const SCAN_LIMIT: usize = 1000;

/// Storage operations over per-kind collections.
///
/// # Identity
///
/// Every record is keyed by its generated `id` field, assigned once at
/// creation by the minting layer. Backends must never expose their internal
/// row identifier.
///
/// # Errors
///
/// Lookup, update, and delete against a missing identity return
/// [`StorageError::NotFound`](crate::StorageError::NotFound) with the entity
/// kind, except [`find_by_id`](RecordStore::find_by_id) which returns
/// `Ok(None)` and leaves the not-found decision to the caller.
///
/// # Example
///
/// ```ignore
/// use medibase_model::{Patient, RecordMinter};
/// use medibase_persistence::RecordStore;
///
/// async fn example<S: RecordStore>(store: &S, minter: &RecordMinter) -> StorageResult<()> {
///     let patient: Patient = minter.mint(input);
///     store.insert(&patient).await?;
///     let found = store.find_by_id::<Patient>(patient.id()).await?;
///     assert!(found.is_some());
///     store.delete::<Patient>(patient.id()).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Persists a freshly minted record into its kind's collection.
    ///
    /// No uniqueness check is performed beyond the generated identity, and
    /// no other collection is consulted.
    async fn insert<R: Record>(&self, record: &R) -> StorageResult<()>;

    /// Returns all records of a kind, in stored order, capped at
    /// [`SCAN_LIMIT`] entries.
    async fn find_all<R: Record>(&self) -> StorageResult<Vec<R>>;

    /// Returns the record with the given identity, or `None`.
    async fn find_by_id<R: Record>(&self, id: &str) -> StorageResult<Option<R>>;

    /// Replaces every creation-shape field of the record with the supplied
    /// values, leaving identity and creation timestamp untouched.
    ///
    /// Returns the updated record, or `NotFound` if no record matched.
    async fn replace_fields<R: Record>(&self, id: &str, input: &R::Create) -> StorageResult<R>;

    /// Removes the record with the given identity.
    ///
    /// Returns `NotFound` if nothing matched; on success only an
    /// acknowledgement is returned, not the deleted record.
    async fn delete<R: Record>(&self, id: &str) -> StorageResult<()>;

    /// Patches exactly one field of one record, touching nothing else.
    ///
    /// This backs the dedicated status updates (Appointment `status`, Bill
    /// `payment_status`). It is deliberately not implemented in terms of
    /// [`replace_fields`](RecordStore::replace_fields), whose contract is
    /// full creation-shape replacement.
    async fn set_field(
        &self,
        kind: EntityKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> StorageResult<()>;

    /// Returns all records of a kind whose `field` equals `value`, with the
    /// same ordering and cap as [`find_all`](RecordStore::find_all).
    async fn find_by_field<R: Record>(&self, field: &str, value: &str) -> StorageResult<Vec<R>>;

    /// Counts all records of a kind.
    async fn count(&self, kind: EntityKind) -> StorageResult<u64>;

    /// Counts records of a kind whose `field` equals `value`.
    async fn count_by_field(
        &self,
        kind: EntityKind,
        field: &str,
        value: &str,
    ) -> StorageResult<u64>;
}
