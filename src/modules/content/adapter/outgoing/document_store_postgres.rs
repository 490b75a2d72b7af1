use crate::content::application::ports::outgoing::{
    Document, DocumentStore, DocumentStoreError, FieldMap,
};
use crate::content::domain::Collection;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{
    ActiveModel as DocumentActiveModel, Column as DocumentColumn, Entity as DocumentEntity,
    Model as DocumentModel,
};

#[derive(Debug, Clone)]
pub struct DocumentStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl DocumentStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<DocumentModel, DocumentStoreError> {
        DocumentEntity::find_by_id(id)
            .filter(DocumentColumn::Collection.eq(collection.as_str()))
            .one(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?
            .ok_or(DocumentStoreError::NotFound)
    }
}

#[async_trait]
impl DocumentStore for DocumentStorePostgres {
    async fn list(
        &self,
        collection: Collection,
        sort_field: &str,
    ) -> Result<Vec<Document>, DocumentStoreError> {
        let models: Vec<DocumentModel> = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.as_str()))
            .order_by_desc(DocumentColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        let mut documents: Vec<Document> = models.iter().map(DocumentModel::to_domain).collect();

        // Anything other than the creation timestamp sorts on the JSON
        // text projection of the field.
        if sort_field != "created_at" {
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
        let model = DocumentModel::from_fields(collection.as_str(), fields);
        let active_model: DocumentActiveModel = model.into();

        let inserted: DocumentModel = DocumentEntity::insert(active_model)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        Ok(inserted.to_domain())
    }

    async fn patch(
        &self,
        collection: Collection,
        id: Uuid,
        changes: FieldMap,
    ) -> Result<Document, DocumentStoreError> {
        let existing = self.find_model(collection, id).await?;

        let mut fields = existing.to_domain().fields;
        for (key, value) in changes {
            fields.insert(key, value);
        }

        let mut active_model: DocumentActiveModel = existing.into();
        active_model.fields = Set(serde_json::Value::Object(fields));

        let updated = active_model
            .update(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), DocumentStoreError> {
        let result = DocumentEntity::delete_many()
            .filter(DocumentColumn::Id.eq(id))
            .filter(DocumentColumn::Collection.eq(collection.as_str()))
            .exec(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DocumentStoreError::NotFound);
        }

        Ok(())
    }

    async fn find_single(
        &self,
        collection: Collection,
    ) -> Result<Option<Document>, DocumentStoreError> {
        let model = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.as_str()))
            .order_by_desc(DocumentColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        Ok(model.map(|model| model.to_domain()))
    }

    async fn put_single(
        &self,
        collection: Collection,
        fields: FieldMap,
    ) -> Result<Document, DocumentStoreError> {
        let existing = DocumentEntity::find()
            .filter(DocumentColumn::Collection.eq(collection.as_str()))
            .order_by_desc(DocumentColumn::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

        match existing {
            Some(model) => {
                let mut active_model: DocumentActiveModel = model.into();
                active_model.fields = Set(serde_json::Value::Object(fields));

                let updated = active_model
                    .update(&*self.db)
                    .await
                    .map_err(|err| DocumentStoreError::Database(err.to_string()))?;

                Ok(updated.to_domain())
            }
            None => self.insert(collection, fields).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    fn model(collection: &str, fields: serde_json::Value) -> DocumentModel {
        DocumentModel {
            id: Uuid::new_v4(),
            collection: collection.to_string(),
            fields,
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn list_maps_rows_to_documents() {
        let rows = vec![
            model("tools", json!({ "name": "Figma" })),
            model("tools", json!({ "name": "Photoshop" })),
        ];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let documents = store.list(Collection::Tools, "created_at").await.unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].field("name"), &json!("Figma"));
    }

    #[tokio::test]
    async fn list_propagates_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("connection lost".to_string())])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store.list(Collection::Tools, "created_at").await;

        assert!(matches!(result, Err(DocumentStoreError::Database(_))));
    }

    #[tokio::test]
    async fn insert_returns_the_stored_document() {
        let stored = model("experience", json!({ "company": "Acme" }));
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let mut fields = FieldMap::new();
        fields.insert("company".to_string(), json!("Acme"));

        let document = store.insert(Collection::Experience, fields).await.unwrap();

        assert_eq!(document.field("company"), &json!("Acme"));
    }

    #[tokio::test]
    async fn patch_merges_into_existing_fields() {
        let existing = model("tools", json!({ "name": "Figma", "level": "basic" }));
        let mut merged = existing.clone();
        merged.fields = json!({ "name": "Figma", "level": "expert" });

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing.clone()], vec![merged]])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let mut changes = FieldMap::new();
        changes.insert("level".to_string(), json!("expert"));

        let document = store
            .patch(Collection::Tools, existing.id, changes)
            .await
            .unwrap();

        assert_eq!(document.field("name"), &json!("Figma"));
        assert_eq!(document.field("level"), &json!("expert"));
    }

    #[tokio::test]
    async fn patch_missing_record_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<DocumentModel>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store
            .patch(Collection::Tools, Uuid::new_v4(), FieldMap::new())
            .await;

        assert_eq!(result, Err(DocumentStoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store.delete(Collection::Tools, Uuid::new_v4()).await;

        assert_eq!(result, Err(DocumentStoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_with_match_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        assert!(store.delete(Collection::Tools, Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn find_single_returns_none_when_absent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<DocumentModel>::new()])
            .into_connection();

        let store = DocumentStorePostgres::new(Arc::new(db));
        let result = store.find_single(Collection::Profile).await.unwrap();

        assert!(result.is_none());
    }
}
