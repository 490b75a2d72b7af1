use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("refresh token rejected: {0}")]
    InvalidToken(String),
    #[error("token error: {0}")]
    TokenError(String),
}

#[async_trait::async_trait]
pub trait IRefreshSessionUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError>;
}

pub struct RefreshSessionUseCase {
    tokens: Arc<dyn TokenProvider>,
}

impl RefreshSessionUseCase {
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { tokens }
    }
}

#[async_trait::async_trait]
impl IRefreshSessionUseCase for RefreshSessionUseCase {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError> {
        let access_token = self
            .tokens
            .refresh_access_token(refresh_token)
            .map_err(|err| match err {
                TokenError::EncodingError(msg) => RefreshError::TokenError(msg),
                other => RefreshError::InvalidToken(other.to_string()),
            })?;

        debug!("access token refreshed");
        Ok(access_token)
    }
}
