use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::{Collection, ProfileData};
use serde_json::Value;
use std::sync::Arc;

#[async_trait::async_trait]
pub trait ISaveProfileUseCase: Send + Sync {
    async fn execute(&self, profile: ProfileData) -> Result<ProfileData, CreateRecordError>;
}

pub struct SaveProfileUseCase {
    store: Arc<dyn DocumentStore>,
}

impl SaveProfileUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ISaveProfileUseCase for SaveProfileUseCase {
    async fn execute(&self, profile: ProfileData) -> Result<ProfileData, CreateRecordError> {
        if profile.full_name.trim().is_empty() {
            return Err(CreateRecordError::MissingField("full_name"));
        }
        if profile.title.trim().is_empty() {
            return Err(CreateRecordError::MissingField("title"));
        }

        let fields = match serde_json::to_value(&profile) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                return Err(CreateRecordError::RepositoryError(
                    "profile did not serialize to an object".to_string(),
                ))
            }
        };

        let document = self
            .store
            .put_single(Collection::Profile, fields)
            .await
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))?;

        serde_json::from_value(Value::Object(document.fields))
            .map_err(|err| CreateRecordError::RepositoryError(err.to_string()))
    }
}
