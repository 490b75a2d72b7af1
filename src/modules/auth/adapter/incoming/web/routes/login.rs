use crate::auth::application::use_cases::login_admin::LoginError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{http::StatusCode, post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct LoginRequestDto {
    /// ID token from the provider's sign-in flow.
    pub id_token: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    access_token: String,
    refresh_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

#[post("/api/auth/login")]
pub async fn login_admin_handler(
    body: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    if dto.id_token.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "id_token must not be empty");
    }

    info!("Admin login attempt");

    match data.login_admin_use_case.execute(&dto.id_token).await {
        Ok(session) => {
            info!("Admin logged in successfully");
            ApiResponse::success(LoginResponse {
                access_token: session.access_token,
                refresh_token: session.refresh_token,
                email: session.email,
            })
        }

        Err(LoginError::NotAuthorized) => {
            warn!("Login rejected: account is not the site admin");
            ApiResponse::forbidden("NOT_AUTHORIZED", "This account cannot manage the site")
        }

        Err(LoginError::InvalidIdToken(ref e)) => {
            warn!(error = %e, "Login rejected: invalid id token");
            ApiResponse::unauthorized("INVALID_ID_TOKEN", "The sign-in token was not accepted")
        }

        Err(LoginError::ProviderUnavailable(ref e)) => {
            error!(error = %e, "Identity provider unreachable");
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "IDENTITY_PROVIDER_UNAVAILABLE",
                "Could not reach the identity provider",
            )
        }

        Err(LoginError::TokenError(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
