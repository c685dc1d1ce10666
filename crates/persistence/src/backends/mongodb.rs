//! MongoDB storage backend.
//!
//! One long-lived [`Client`] serves all operations; it is constructed once at
//! process start and released through [`MongoStore::shutdown`]. Each entity
//! kind maps to one collection, and every operation touches exactly one
//! document, so the driver's per-document atomicity is the only consistency
//! guarantee in play.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use medibase_model::{EntityKind, Record};

use crate::error::{StorageError, StorageResult};
use crate::store::{RecordStore, SCAN_LIMIT};

/// A record store backed by a MongoDB database.
///
/// Cloning is cheap and shares the underlying client; `main` typically keeps
/// one clone aside to call [`shutdown`](MongoStore::shutdown) after the
/// server stops.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Connects to the database named `db_name` at `uri`.
    pub async fn connect(uri: &str, db_name: &str) -> StorageResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        info!(database = %db_name, "Connected to MongoDB");
        Ok(Self { client, db })
    }

    /// Releases the underlying client. Call once, after the last request.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("MongoDB client released");
    }

    /// The typed collection for a record kind.
    fn collection<R: Record>(&self) -> Collection<R> {
        self.db.collection(R::KIND.collection())
    }

    /// The untyped collection for a kind, for field patches and counts.
    fn raw(&self, kind: EntityKind) -> Collection<Document> {
        self.db.collection(kind.collection())
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    fn backend_name(&self) -> &'static str {
        "mongodb"
    }

    async fn insert<R: Record>(&self, record: &R) -> StorageResult<()> {
        self.collection::<R>().insert_one(record).await?;
        debug!(kind = %R::KIND, id = %record.id(), "Inserted record");
        Ok(())
    }

    async fn find_all<R: Record>(&self) -> StorageResult<Vec<R>> {
        let cursor = self
            .collection::<R>()
            .find(doc! {})
            .limit(SCAN_LIMIT as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id<R: Record>(&self, id: &str) -> StorageResult<Option<R>> {
        Ok(self.collection::<R>().find_one(doc! { "id": id }).await?)
    }

    async fn replace_fields<R: Record>(&self, id: &str, input: &R::Create) -> StorageResult<R> {
        let fields = mongodb::bson::to_document(input)?;
        let result = self
            .raw(R::KIND)
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await?;
        if result.matched_count == 0 {
            return Err(StorageError::not_found(R::KIND));
        }
        // Read back the stored shape; the record existed a moment ago.
        self.find_by_id::<R>(id)
            .await?
            .ok_or_else(|| StorageError::not_found(R::KIND))
    }

    async fn delete<R: Record>(&self, id: &str) -> StorageResult<()> {
        let result = self
            .collection::<R>()
            .delete_one(doc! { "id": id })
            .await?;
        if result.deleted_count == 0 {
            return Err(StorageError::not_found(R::KIND));
        }
        debug!(kind = %R::KIND, id = %id, "Deleted record");
        Ok(())
    }

    async fn set_field(
        &self,
        kind: EntityKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> StorageResult<()> {
        let mut fields = Document::new();
        fields.insert(field, value);
        let result = self
            .raw(kind)
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await?;
        if result.matched_count == 0 {
            return Err(StorageError::not_found(kind));
        }
        Ok(())
    }

    async fn find_by_field<R: Record>(&self, field: &str, value: &str) -> StorageResult<Vec<R>> {
        let mut filter = Document::new();
        filter.insert(field, value);
        let cursor = self
            .collection::<R>()
            .find(filter)
            .limit(SCAN_LIMIT as i64)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        Ok(self.raw(kind).count_documents(doc! {}).await?)
    }

    async fn count_by_field(
        &self,
        kind: EntityKind,
        field: &str,
        value: &str,
    ) -> StorageResult<u64> {
        let mut filter = Document::new();
        filter.insert(field, value);
        Ok(self.raw(kind).count_documents(filter).await?)
    }
}
