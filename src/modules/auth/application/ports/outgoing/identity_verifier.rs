use async_trait::async_trait;
use thiserror::Error;

/// Identity asserted by the external provider after verifying an ID
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    /// Provider-scoped stable subject identifier.
    pub subject: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// The provider rejected the token (expired, wrong audience,
    /// malformed).
    #[error("identity token rejected: {0}")]
    Rejected(String),
    #[error("identity provider unreachable: {0}")]
    Unavailable(String),
}

/// Verification of a provider-issued ID token, behind a port so login
/// tests never talk to the network.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify_id_token(&self, id_token: &str) -> Result<ProviderIdentity, IdentityError>;
}
