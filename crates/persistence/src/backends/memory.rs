//! In-memory storage backend.
//!
//! Records are held as JSON values in per-kind vectors, preserving insertion
//! order. The backend exists for tests and local experiments; it implements
//! the full [`RecordStore`] contract, including the scan cap and the
//! single-field patch semantics.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use medibase_model::{EntityKind, Record};

use crate::error::{StorageError, StorageResult};
use crate::store::{RecordStore, SCAN_LIMIT};

/// An in-process record store backed by `RwLock<HashMap<..>>`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<EntityKind, Vec<Value>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(doc: &Value, id: &str) -> bool {
    doc.get("id").and_then(Value::as_str) == Some(id)
}

fn field_equals(doc: &Value, field: &str, value: &str) -> bool {
    doc.get(field).and_then(Value::as_str) == Some(value)
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn insert<R: Record>(&self, record: &R) -> StorageResult<()> {
        let doc = serde_json::to_value(record)?;
        let mut collections = self.collections.write().expect("collection lock poisoned");
        collections.entry(R::KIND).or_default().push(doc);
        Ok(())
    }

    async fn find_all<R: Record>(&self) -> StorageResult<Vec<R>> {
        let collections = self.collections.read().expect("collection lock poisoned");
        collections
            .get(&R::KIND)
            .into_iter()
            .flatten()
            .take(SCAN_LIMIT)
            .map(|doc| serde_json::from_value(doc.clone()).map_err(StorageError::from))
            .collect()
    }

    async fn find_by_id<R: Record>(&self, id: &str) -> StorageResult<Option<R>> {
        let collections = self.collections.read().expect("collection lock poisoned");
        collections
            .get(&R::KIND)
            .into_iter()
            .flatten()
            .find(|doc| has_id(doc, id))
            .map(|doc| serde_json::from_value(doc.clone()).map_err(StorageError::from))
            .transpose()
    }

    async fn replace_fields<R: Record>(&self, id: &str, input: &R::Create) -> StorageResult<R> {
        let patch = serde_json::to_value(input)?;
        let mut collections = self.collections.write().expect("collection lock poisoned");
        let doc = collections
            .get_mut(&R::KIND)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
            .ok_or_else(|| StorageError::not_found(R::KIND))?;

        if let (Some(doc), Some(patch)) = (doc.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                doc.insert(key.clone(), value.clone());
            }
        }

        Ok(serde_json::from_value(doc.clone())?)
    }

    async fn delete<R: Record>(&self, id: &str) -> StorageResult<()> {
        let mut collections = self.collections.write().expect("collection lock poisoned");
        let docs = collections
            .get_mut(&R::KIND)
            .ok_or_else(|| StorageError::not_found(R::KIND))?;
        let position = docs
            .iter()
            .position(|doc| has_id(doc, id))
            .ok_or_else(|| StorageError::not_found(R::KIND))?;
        docs.remove(position);
        Ok(())
    }

    async fn set_field(
        &self,
        kind: EntityKind,
        id: &str,
        field: &str,
        value: &str,
    ) -> StorageResult<()> {
        let mut collections = self.collections.write().expect("collection lock poisoned");
        let doc = collections
            .get_mut(&kind)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
            .ok_or_else(|| StorageError::not_found(kind))?;
        doc[field] = Value::String(value.to_string());
        Ok(())
    }

    async fn find_by_field<R: Record>(&self, field: &str, value: &str) -> StorageResult<Vec<R>> {
        let collections = self.collections.read().expect("collection lock poisoned");
        collections
            .get(&R::KIND)
            .into_iter()
            .flatten()
            .filter(|doc| field_equals(doc, field, value))
            .take(SCAN_LIMIT)
            .map(|doc| serde_json::from_value(doc.clone()).map_err(StorageError::from))
            .collect()
    }

    async fn count(&self, kind: EntityKind) -> StorageResult<u64> {
        let collections = self.collections.read().expect("collection lock poisoned");
        Ok(collections.get(&kind).map_or(0, Vec::len) as u64)
    }

    async fn count_by_field(
        &self,
        kind: EntityKind,
        field: &str,
        value: &str,
    ) -> StorageResult<u64> {
        let collections = self.collections.read().expect("collection lock poisoned");
        Ok(collections
            .get(&kind)
            .into_iter()
            .flatten()
            .filter(|doc| field_equals(doc, field, value))
            .count() as u64)
    }
}
