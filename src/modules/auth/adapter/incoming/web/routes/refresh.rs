use crate::auth::application::use_cases::refresh_session::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

#[derive(Deserialize)]
pub struct RefreshRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize)]
pub struct RefreshResponse {
    access_token: String,
}

#[post("/api/auth/refresh")]
pub async fn refresh_session_handler(
    body: web::Json<RefreshRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();

    if dto.refresh_token.trim().is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "refresh_token must not be empty");
    }

    info!("Token refresh attempt");

    match data
        .refresh_session_use_case
        .execute(dto.refresh_token.trim())
        .await
    {
        Ok(access_token) => {
            info!("Token refreshed successfully");
            ApiResponse::success(RefreshResponse { access_token })
        }

        Err(RefreshError::InvalidToken(ref e)) => {
            warn!(error = %e, "Token refresh rejected");
            ApiResponse::unauthorized("INVALID_REFRESH_TOKEN", "Invalid or expired refresh token")
        }

        Err(RefreshError::TokenError(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
