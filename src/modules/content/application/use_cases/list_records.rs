use crate::content::application::manager::{filter_documents, view_for};
use crate::content::application::ports::outgoing::{DocumentStore, DocumentStoreError};
use crate::content::domain::Collection;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// The rendered table for one managed collection: column labels, one
/// row of display cells per visible record, and the trailing
/// matched-of-total summary.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManagedTable {
    pub title: String,
    pub columns: Vec<ManagedColumn>,
    pub rows: Vec<ManagedRow>,
    pub matched: usize,
    pub total: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManagedColumn {
    pub key: String,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManagedRow {
    pub id: Uuid,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListRecordsError {
    NotManaged,
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListRecordsUseCase: Send + Sync {
    async fn execute(
        &self,
        collection: Collection,
        query: &str,
    ) -> Result<ManagedTable, ListRecordsError>;
}

pub struct ListRecordsUseCase {
    store: Arc<dyn DocumentStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IListRecordsUseCase for ListRecordsUseCase {
    async fn execute(
        &self,
        collection: Collection,
        query: &str,
    ) -> Result<ManagedTable, ListRecordsError> {
        let view = view_for(collection).ok_or(ListRecordsError::NotManaged)?;

        let documents = self
            .store
            .list(collection, view.sort_field)
            .await
            .map_err(|err| match err {
                DocumentStoreError::Database(msg) => ListRecordsError::RepositoryError(msg),
                other => ListRecordsError::RepositoryError(other.to_string()),
            })?;

        let total = documents.len();
        let visible = filter_documents(&documents, &view.fields, query);

        let rows = visible
            .iter()
            .map(|document| ManagedRow {
                id: document.id,
                cells: view
                    .fields
                    .iter()
                    .map(|field| field.project(document))
                    .collect(),
            })
            .collect::<Vec<_>>();

        Ok(ManagedTable {
            title: view.title.to_string(),
            columns: view
                .fields
                .iter()
                .map(|field| ManagedColumn {
                    key: field.key.to_string(),
                    label: field.label.to_string(),
                })
                .collect(),
            matched: rows.len(),
            rows,
            total,
        })
    }
}
