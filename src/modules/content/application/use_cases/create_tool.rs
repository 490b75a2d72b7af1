use crate::content::application::ports::outgoing::{Document, DocumentStore, FieldMap};
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::{Collection, ToolCategory, ToolLevel};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreateToolData {
    pub name: String,
    pub category: ToolCategory,
    pub level: ToolLevel,
    pub icon: Option<String>,
}

#[async_trait::async_trait]
pub trait ICreateToolUseCase: Send + Sync {
    async fn execute(&self, data: CreateToolData) -> Result<Document, CreateRecordError>;
}

pub struct CreateToolUseCase {
    store: Arc<dyn DocumentStore>,
}

impl CreateToolUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ICreateToolUseCase for CreateToolUseCase {
    async fn execute(&self, data: CreateToolData) -> Result<Document, CreateRecordError> {
        if data.name.trim().is_empty() {
            return Err(CreateRecordError::MissingField("name"));
        }

        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), Value::String(data.name));
        fields.insert(
            "category".to_string(),
            serde_json::to_value(data.category)
                .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?,
        );
        fields.insert(
            "level".to_string(),
            serde_json::to_value(data.level)
                .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?,
        );
        let icon = match data.icon {
            Some(icon) if !icon.trim().is_empty() => Value::String(icon),
            _ => Value::Null,
        };
        fields.insert("icon".to_string(), icon);

        self.store
            .insert(Collection::Tools, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))
    }
}
