use crate::content::application::ports::outgoing::{
    Document, DocumentStore, DocumentStoreError, FieldMap,
};
use crate::content::domain::Collection;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum PatchRecordError {
    NotManaged,
    RecordNotFound,
    NothingToUpdate,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IPatchRecordUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: Collection,
        id: Uuid,
        changes: FieldMap,
    ) -> Result<Document, PatchRecordError>;
}

pub struct PatchRecordUseCase {
    store: Arc<dyn DocumentStore>,
}

impl PatchRecordUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IPatchRecordUseCase for PatchRecordUseCase {
    async fn execute(
        &self,
        collection: Collection,
        id: Uuid,
        mut changes: FieldMap,
    ) -> Result<Document, PatchRecordError> {
        // The profile singleton has its own validated upsert and the
        // logo caches are internal; neither is editable through the
        // manager.
        if !collection.is_managed() {
            return Err(PatchRecordError::NotManaged);
        }

        // Store-assigned fields are never part of the write payload.
        changes.remove("id");
        changes.remove("created_at");

        if changes.is_empty() {
            return Err(PatchRecordError::NothingToUpdate);
        }

        self.store
            .patch(collection, id, changes)
            .await
            .map_err(|err| match err {
                DocumentStoreError::NotFound => PatchRecordError::RecordNotFound,
                DocumentStoreError::Database(msg) => PatchRecordError::RepositoryError(msg),
            })
    }
}
