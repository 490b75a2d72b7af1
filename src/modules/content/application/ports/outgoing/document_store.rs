use crate::content::domain::Collection;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub type FieldMap = Map<String, Value>;

/// One stored record: an opaque id and creation timestamp assigned by
/// the store, plus a flat bag of named fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub fields: FieldMap,
}

impl Document {
    pub fn field(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&Value::Null)
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum DocumentStoreError {
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(String),
}

/// Collection-scoped CRUD against the backing document store.
///
/// Mirrors what the admin panel needs and nothing more: ordered
/// listing, append, partial update, delete, and singleton get/put for
/// the profile record.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All records of a collection, ordered descending by `sort_field`.
    /// Fields other than the creation timestamp sort on their JSON
    /// text projection.
    async fn list(
        &self,
        collection: Collection,
        sort_field: &str,
    ) -> Result<Vec<Document>, DocumentStoreError>;

    async fn insert(
        &self,
        collection: Collection,
        fields: FieldMap,
    ) -> Result<Document, DocumentStoreError>;

    /// Merge `changes` into the record's existing fields. Keys absent
    /// from `changes` keep their stored value.
    async fn patch(
        &self,
        collection: Collection,
        id: Uuid,
        changes: FieldMap,
    ) -> Result<Document, DocumentStoreError>;

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), DocumentStoreError>;

    /// The single record of a singleton collection, if one was ever
    /// written.
    async fn find_single(
        &self,
        collection: Collection,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Replace the singleton record, creating it on first write.
    async fn put_single(
        &self,
        collection: Collection,
        fields: FieldMap,
    ) -> Result<Document, DocumentStoreError>;
}
