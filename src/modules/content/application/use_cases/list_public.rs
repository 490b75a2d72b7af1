use crate::content::application::ports::outgoing::{Document, DocumentStore, DocumentStoreError};
use crate::content::domain::Collection;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListPublicError {
    /// Cache collections are internal and never served to visitors.
    #[error("collection is not publicly listable")]
    NotPublic,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Anonymous reads for the public site, newest first. Records go out
/// as stored; the frontend owns presentation.
#[async_trait::async_trait]
pub trait IListPublicUseCase: Send + Sync {
    async fn execute(&self, collection: Collection) -> Result<Vec<Document>, ListPublicError>;
}

pub struct ListPublicUseCase {
    store: Arc<dyn DocumentStore>,
}

impl ListPublicUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IListPublicUseCase for ListPublicUseCase {
    async fn execute(&self, collection: Collection) -> Result<Vec<Document>, ListPublicError> {
        if !collection.is_managed() {
            return Err(ListPublicError::NotPublic);
        }
        self.store
            .list(collection, "created_at")
            .await
            .map_err(|err: DocumentStoreError| ListPublicError::RepositoryError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::FieldMap;
    use crate::tests::support::stubs::InMemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn lists_newest_first() {
        let store = Arc::new(InMemoryStore::new());
        for name in ["Photoshop", "Figma"] {
            let mut fields = FieldMap::new();
            fields.insert("name".to_string(), json!(name));
            store.insert(Collection::Tools, fields).await.unwrap();
        }

        let use_case = ListPublicUseCase::new(store);
        let documents = use_case.execute(Collection::Tools).await.unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].field("name"), &json!("Figma"));
        assert_eq!(documents[1].field("name"), &json!("Photoshop"));
    }

    #[tokio::test]
    async fn cache_collections_are_not_served() {
        let store = Arc::new(InMemoryStore::new());
        let use_case = ListPublicUseCase::new(store);

        assert_eq!(
            use_case.execute(Collection::Companies).await,
            Err(ListPublicError::NotPublic)
        );
        assert_eq!(
            use_case.execute(Collection::Profile).await,
            Err(ListPublicError::NotPublic)
        );
    }
}
