use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Invalid token type, expected: {0}")]
    InvalidTokenType(String),
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims for admin sessions. `sub` carries the identity
/// provider's subject string, not a local user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub token_type: String, // "access" or "refresh"
    pub is_admin: bool,
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, subject: &str, is_admin: bool) -> Result<String, TokenError>;
    fn generate_refresh_token(&self, subject: &str, is_admin: bool) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError>;
}
