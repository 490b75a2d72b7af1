use crate::content::application::ports::outgoing::{
    Document, DocumentStore, DocumentStoreError, FieldMap,
};
use crate::content::domain::Collection;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory [`DocumentStore`] for use-case and route tests.
///
/// Assigns ids and strictly increasing creation timestamps, so listing
/// order is deterministic. Failure toggles simulate a broken backend
/// either wholesale or for the cache collections only.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    ticks: Mutex<i64>,
    fail_everything: bool,
    fail_cache_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation reports a database error.
    pub fn failing(mut self) -> Self {
        self.fail_everything = true;
        self
    }

    /// Writes to the companies/institutions caches fail; everything
    /// else works.
    pub fn failing_cache_writes(mut self) -> Self {
        self.fail_cache_writes = true;
        self
    }

    /// Snapshot of a collection in insertion order.
    pub fn documents_in(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Seed a record directly, bypassing the failure toggles.
    pub fn seed(&self, collection: Collection, fields: FieldMap) -> Document {
        let document = Document {
            id: Uuid::new_v4(),
            created_at: self.next_timestamp(),
            fields,
        };
        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(document.clone());
        document
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        let mut ticks = self.ticks.lock().unwrap();
        *ticks += 1;
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(*ticks)
    }

    fn check_available(&self) -> Result<(), DocumentStoreError> {
        if self.fail_everything {
            return Err(DocumentStoreError::Database(
                "store unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn check_writable(&self, collection: Collection) -> Result<(), DocumentStoreError> {
        self.check_available()?;
        let is_cache = matches!(collection, Collection::Companies | Collection::Institutions);
        if self.fail_cache_writes && is_cache {
            return Err(DocumentStoreError::Database(
                "cache write refused".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn list(
        &self,
        collection: Collection,
        sort_field: &str,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        self.check_available()?;
        let mut documents = self.documents_in(collection);
        if sort_field == "created_at" {
            documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        } else {
            documents.sort_by(|a, b| {
                b.field(sort_field)
                    .to_string()
                    .cmp(&a.field(sort_field).to_string())
            });
        }
        Ok(documents)
    }

    async fn insert(
        &self,
        collection: Collection,
        fields: FieldMap,
    ) -> Result<Document, DocumentStoreError> {
        self.check_writable(collection)?;
        Ok(self.seed(collection, fields))
    }

    async fn patch(
        &self,
        collection: Collection,
        id: Uuid,
        changes: FieldMap,
    ) -> Result<Document, DocumentStoreError> {
        self.check_writable(collection)?;
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();
        let document = documents
            .iter_mut()
            .find(|document| document.id == id)
            .ok_or(DocumentStoreError::NotFound)?;
        for (key, value) in changes {
            document.fields.insert(key, value);
        }
        Ok(document.clone())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), DocumentStoreError> {
        self.check_writable(collection)?;
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();
        let before = documents.len();
        documents.retain(|document| document.id != id);
        if documents.len() == before {
            return Err(DocumentStoreError::NotFound);
        }
        Ok(())
    }

    async fn find_single(
        &self,
        collection: Collection,
    ) -> Result<Option<Document>, DocumentStoreError> {
        self.check_available()?;
        Ok(self.documents_in(collection).into_iter().next())
    }

    async fn put_single(
        &self,
        collection: Collection,
        fields: FieldMap,
    ) -> Result<Document, DocumentStoreError> {
        self.check_writable(collection)?;
        let mut collections = self.collections.lock().unwrap();
        let documents = collections.entry(collection).or_default();
        if let Some(existing) = documents.first_mut() {
            existing.fields = fields;
            return Ok(existing.clone());
        }
        drop(collections);
        Ok(self.seed(collection, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn named(name: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), json!(name));
        fields
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let store = InMemoryStore::new();
        store.insert(Collection::Tools, named("first")).await.unwrap();
        store.insert(Collection::Tools, named("second")).await.unwrap();

        let documents = store.list(Collection::Tools, "created_at").await.unwrap();
        assert_eq!(documents[0].field("name"), &json!("second"));
    }

    #[tokio::test]
    async fn patch_merges_and_delete_removes() {
        let store = InMemoryStore::new();
        let document = store.insert(Collection::Tools, named("Figma")).await.unwrap();

        let mut changes = FieldMap::new();
        changes.insert("level".to_string(), json!("expert"));
        let patched = store
            .patch(Collection::Tools, document.id, changes)
            .await
            .unwrap();
        assert_eq!(patched.field("name"), &json!("Figma"));
        assert_eq!(patched.field("level"), &json!("expert"));

        store.delete(Collection::Tools, document.id).await.unwrap();
        assert!(store.documents_in(Collection::Tools).is_empty());
    }

    #[tokio::test]
    async fn cache_failure_mode_only_hits_cache_collections() {
        let store = InMemoryStore::new().failing_cache_writes();

        assert!(store.insert(Collection::Tools, named("ok")).await.is_ok());
        assert!(store
            .insert(Collection::Companies, named("nope"))
            .await
            .is_err());
    }
}
