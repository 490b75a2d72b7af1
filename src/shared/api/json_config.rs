use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Malformed request bodies come back in the standard envelope
/// instead of actix's plain-text default.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}
