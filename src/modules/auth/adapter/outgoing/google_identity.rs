use crate::auth::application::ports::outgoing::identity_verifier::{
    IdentityError, IdentityVerifier, ProviderIdentity,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Relevant subset of Google's tokeninfo response.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    sub: String,
    aud: String,
    email: Option<String>,
}

/// ID-token verification against Google's tokeninfo endpoint. The
/// endpoint validates signature and expiry; we additionally check that
/// the token was minted for our OAuth client.
pub struct GoogleIdentityVerifier {
    http: reqwest::Client,
    client_id: String,
}

impl GoogleIdentityVerifier {
    pub fn new(client_id: String) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http, client_id })
    }
}

/// A 5xx answer is a provider outage, not a verdict on the token;
/// tokeninfo answers 4xx for anything it cannot validate.
fn status_error(status: reqwest::StatusCode) -> Option<IdentityError> {
    if status.is_server_error() {
        return Some(IdentityError::Unavailable(format!(
            "provider answered {status}"
        )));
    }
    if !status.is_success() {
        return Some(IdentityError::Rejected(format!(
            "provider answered {status}"
        )));
    }
    None
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify_id_token(&self, id_token: &str) -> Result<ProviderIdentity, IdentityError> {
        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|err| IdentityError::Unavailable(err.to_string()))?;

        if let Some(err) = status_error(response.status()) {
            debug!(status = %response.status(), "tokeninfo did not validate the id token");
            return Err(err);
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|err| IdentityError::Unavailable(err.to_string()))?;

        if info.aud != self.client_id {
            return Err(IdentityError::Rejected(
                "token was issued for a different client".to_string(),
            ));
        }

        Ok(ProviderIdentity {
            subject: info.sub,
            email: info.email,
        })
    }
}
