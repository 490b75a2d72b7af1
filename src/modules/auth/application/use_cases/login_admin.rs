use crate::auth::application::ports::outgoing::identity_verifier::{
    IdentityError, IdentityVerifier,
};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub email: Option<String>,
}

#[derive(Debug, Error)]
pub enum LoginError {
    /// Valid identity, but not the configured admin. No session is
    /// issued.
    #[error("account is not authorized to manage this site")]
    NotAuthorized,
    #[error("identity token rejected: {0}")]
    InvalidIdToken(String),
    #[error("identity provider unreachable: {0}")]
    ProviderUnavailable(String),
    #[error("token error: {0}")]
    TokenError(String),
}

#[async_trait::async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, id_token: &str) -> Result<SessionTokens, LoginError>;
}

/// Single-admin gate: the provider-verified subject must equal the one
/// statically configured subject, everyone else is turned away.
pub struct LoginAdminUseCase {
    verifier: Arc<dyn IdentityVerifier>,
    tokens: Arc<dyn TokenProvider>,
    authorized_subject: String,
}

impl LoginAdminUseCase {
    pub fn new(
        verifier: Arc<dyn IdentityVerifier>,
        tokens: Arc<dyn TokenProvider>,
        authorized_subject: String,
    ) -> Self {
        Self {
            verifier,
            tokens,
            authorized_subject,
        }
    }
}

#[async_trait::async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, id_token: &str) -> Result<SessionTokens, LoginError> {
        let identity = self
            .verifier
            .verify_id_token(id_token)
            .await
            .map_err(|err| match err {
                IdentityError::Rejected(msg) => LoginError::InvalidIdToken(msg),
                IdentityError::Unavailable(msg) => LoginError::ProviderUnavailable(msg),
            })?;

        if identity.subject != self.authorized_subject {
            warn!(subject = %identity.subject, "login attempt by unauthorized account");
            return Err(LoginError::NotAuthorized);
        }

        let access_token = self
            .tokens
            .generate_access_token(&identity.subject, true)
            .map_err(|err| LoginError::TokenError(err.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(&identity.subject, true)
            .map_err(|err| LoginError::TokenError(err.to_string()))?;

        info!("admin session issued");
        Ok(SessionTokens {
            access_token,
            refresh_token,
            email: identity.email,
        })
    }
}
