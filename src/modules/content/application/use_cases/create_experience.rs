use crate::content::application::catalog::LogoCatalog;
use crate::content::application::ports::outgoing::{Document, DocumentStore, FieldMap};
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::Collection;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CreateExperienceData {
    pub company: String,
    pub position: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current_position: bool,
    pub location: String,
    pub description: String,
    pub custom_logo_url: Option<String>,
}

#[async_trait::async_trait]
pub trait ICreateExperienceUseCase: Send + Sync {
    async fn execute(&self, data: CreateExperienceData) -> Result<Document, CreateRecordError>;
}

/// Appends one experience record. A current position stores a null
/// end date; the logo comes from the custom URL when given, otherwise
/// from the company catalog. Newly seen company logos are remembered
/// in the cache collection as an independent best-effort write.
pub struct CreateExperienceUseCase {
    store: Arc<dyn DocumentStore>,
    catalog: LogoCatalog,
}

impl CreateExperienceUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, catalog: LogoCatalog) -> Self {
        Self { store, catalog }
    }
}

#[async_trait::async_trait]
impl ICreateExperienceUseCase for CreateExperienceUseCase {
    async fn execute(&self, data: CreateExperienceData) -> Result<Document, CreateRecordError> {
        if data.company.trim().is_empty() {
            return Err(CreateRecordError::MissingField("company"));
        }
        if data.position.trim().is_empty() {
            return Err(CreateRecordError::MissingField("position"));
        }
        if data.location.trim().is_empty() {
            return Err(CreateRecordError::MissingField("location"));
        }
        let start_date = data
            .start_date
            .ok_or(CreateRecordError::MissingField("start_date"))?;
        let end_date = match (data.current_position, data.end_date) {
            (true, _) => Value::Null,
            (false, Some(date)) => Value::String(date.format("%Y-%m-%d").to_string()),
            (false, None) => return Err(CreateRecordError::MissingField("end_date")),
        };

        let known_logos = self.catalog.known_companies().await;
        let logo_url = data
            .custom_logo_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| known_logos.get(&data.company).cloned())
            .unwrap_or_default();

        let mut fields = FieldMap::new();
        fields.insert("company".to_string(), Value::String(data.company.clone()));
        fields.insert("position".to_string(), Value::String(data.position));
        fields.insert(
            "start_date".to_string(),
            Value::String(start_date.format("%Y-%m-%d").to_string()),
        );
        fields.insert("end_date".to_string(), end_date);
        fields.insert("location".to_string(), Value::String(data.location));
        fields.insert("description".to_string(), Value::String(data.description));
        fields.insert("logo_url".to_string(), Value::String(logo_url.clone()));

        let document = self
            .store
            .insert(Collection::Experience, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?;

        // The record write above is already committed; a cache failure
        // must not roll it back.
        if !logo_url.is_empty() && !known_logos.contains_key(&data.company) {
            self.catalog
                .remember(Collection::Companies, &data.company, &logo_url)
                .await;
        }

        Ok(document)
    }
}
