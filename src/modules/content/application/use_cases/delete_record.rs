use crate::content::application::ports::outgoing::{DocumentStore, DocumentStoreError};
use crate::content::domain::Collection;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteRecordError {
    NotManaged,
    RecordNotFound,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IDeleteRecordUseCase: Send + Sync {
    async fn execute(&self, collection: Collection, id: Uuid) -> Result<(), DeleteRecordError>;
}

/// Hard delete of one record. The confirmation step lives in the
/// panel; by the time this runs the operator has already confirmed.
pub struct DeleteRecordUseCase {
    store: Arc<dyn DocumentStore>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IDeleteRecordUseCase for DeleteRecordUseCase {
    async fn execute(&self, collection: Collection, id: Uuid) -> Result<(), DeleteRecordError> {
        // The profile singleton and the logo caches have no manager
        // table and are never deleted through this path.
        if !collection.is_managed() {
            return Err(DeleteRecordError::NotManaged);
        }

        self.store
            .delete(collection, id)
            .await
            .map_err(|err| match err {
                DocumentStoreError::NotFound => DeleteRecordError::RecordNotFound,
                DocumentStoreError::Database(msg) => DeleteRecordError::RepositoryError(msg),
            })
    }
}
