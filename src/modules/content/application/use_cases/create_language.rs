use crate::content::application::ports::outgoing::{Document, DocumentStore, FieldMap};
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::{Collection, LanguageLevel};
use serde_json::Value;
use std::sync::Arc;

/// Either a pick from the seeded language list (country and flag
/// resolved by the client from the catalog) or a free-form entry.
#[derive(Debug, Clone, Default)]
pub struct CreateLanguageData {
    pub name: String,
    pub country: String,
    pub flag_url: String,
    pub level: Option<LanguageLevel>,
}

#[async_trait::async_trait]
pub trait ICreateLanguageUseCase: Send + Sync {
    async fn execute(&self, data: CreateLanguageData) -> Result<Document, CreateRecordError>;
}

pub struct CreateLanguageUseCase {
    store: Arc<dyn DocumentStore>,
}

impl CreateLanguageUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ICreateLanguageUseCase for CreateLanguageUseCase {
    async fn execute(&self, data: CreateLanguageData) -> Result<Document, CreateRecordError> {
        if data.name.trim().is_empty() {
            return Err(CreateRecordError::MissingField("name"));
        }
        let level = data
            .level
            .ok_or(CreateRecordError::MissingField("level"))?;

        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::String(data.name));
        fields.insert("country".to_string(), Value::String(data.country));
        fields.insert("flag_url".to_string(), Value::String(data.flag_url));
        fields.insert(
            "level".to_string(),
            serde_json::to_value(level)
                .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?,
        );

        self.store
            .insert(Collection::Languages, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))
    }
}
