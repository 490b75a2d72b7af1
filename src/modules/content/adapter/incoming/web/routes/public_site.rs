use crate::content::application::use_cases::get_profile::GetProfileError;
use crate::content::application::use_cases::list_public::ListPublicError;
use crate::content::domain::Collection;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Anonymous profile read for the landing page.
#[get("/api/profile")]
pub async fn get_public_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_use_case.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to load public profile");
            ApiResponse::internal_error()
        }
    }
}

/// Anonymous listing of one display collection, newest first.
#[get("/api/{collection}")]
pub async fn list_public_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match path.into_inner().parse::<Collection>() {
        Ok(collection) => collection,
        Err(err) => {
            return ApiResponse::not_found("UNKNOWN_COLLECTION", &err.to_string());
        }
    };

    match data.list_public_use_case.execute(collection).await {
        Ok(documents) => ApiResponse::success(documents),
        Err(ListPublicError::NotPublic) => {
            ApiResponse::not_found("UNKNOWN_COLLECTION", "This collection is not public")
        }
        Err(ListPublicError::RepositoryError(ref e)) => {
            error!(error = %e, collection = %collection, "Failed to load public collection");
            ApiResponse::internal_error()
        }
    }
}
