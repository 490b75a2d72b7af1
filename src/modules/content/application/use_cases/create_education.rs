use crate::content::application::catalog::LogoCatalog;
use crate::content::application::ports::outgoing::{Document, DocumentStore, FieldMap};
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::Collection;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct CreateEducationData {
    pub institution: String,
    pub degree: String,
    pub year: Option<String>,
    pub in_progress: bool,
    pub description: String,
    pub custom_logo_url: Option<String>,
}

#[async_trait::async_trait]
pub trait ICreateEducationUseCase: Send + Sync {
    async fn execute(&self, data: CreateEducationData) -> Result<Document, CreateRecordError>;
}

/// Appends one education record, mirroring the experience flow over
/// the institution catalog. Ongoing studies carry the `in_progress`
/// flag and a null year.
pub struct CreateEducationUseCase {
    store: Arc<dyn DocumentStore>,
    catalog: LogoCatalog,
}

impl CreateEducationUseCase {
    pub fn new(store: Arc<dyn DocumentStore>, catalog: LogoCatalog) -> Self {
        Self { store, catalog }
    }
}

#[async_trait::async_trait]
impl ICreateEducationUseCase for CreateEducationUseCase {
    async fn execute(&self, data: CreateEducationData) -> Result<Document, CreateRecordError> {
        if data.institution.trim().is_empty() {
            return Err(CreateRecordError::MissingField("institution"));
        }
        if data.degree.trim().is_empty() {
            return Err(CreateRecordError::MissingField("degree"));
        }
        let year = match (data.in_progress, data.year) {
            (true, _) => Value::Null,
            (false, Some(year)) if !year.trim().is_empty() => Value::String(year),
            (false, _) => return Err(CreateRecordError::MissingField("year")),
        };

        let known_logos = self.catalog.known_institutions().await;
        let logo_url = data
            .custom_logo_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| known_logos.get(&data.institution).cloned())
            .unwrap_or_default();

        let mut fields = FieldMap::new();
        fields.insert(
            "institution".to_string(),
            Value::String(data.institution.clone()),
        );
        fields.insert("degree".to_string(), Value::String(data.degree));
        fields.insert("year".to_string(), year);
        fields.insert("in_progress".to_string(), Value::Bool(data.in_progress));
        fields.insert("description".to_string(), Value::String(data.description));
        fields.insert("logo_url".to_string(), Value::String(logo_url.clone()));

        let document = self
            .store
            .insert(Collection::Education, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?;

        if !logo_url.is_empty() && !known_logos.contains_key(&data.institution) {
            self.catalog
                .remember(Collection::Institutions, &data.institution, &logo_url)
                .await;
        }

        Ok(document)
    }
}
