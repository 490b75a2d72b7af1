use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::domain::{Collection, ProfileData};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GetProfileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    /// The stored profile, or an all-empty one before the first save.
    async fn execute(&self) -> Result<ProfileData, GetProfileError>;
}

pub struct GetProfileUseCase {
    store: Arc<dyn DocumentStore>,
}

impl GetProfileUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl IGetProfileUseCase for GetProfileUseCase {
    async fn execute(&self) -> Result<ProfileData, GetProfileError> {
        let document = self
            .store
            .find_single(Collection::Profile)
            .await
            .map_err(|err| GetProfileError::RepositoryError(err.to_string()))?;

        match document {
            Some(document) => {
                serde_json::from_value(serde_json::Value::Object(document.fields))
                    .map_err(|err| GetProfileError::RepositoryError(err.to_string()))
            }
            None => Ok(ProfileData::default()),
        }
    }
}
