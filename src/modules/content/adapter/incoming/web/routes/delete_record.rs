use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::delete_record::DeleteRecordError;
use crate::content::domain::Collection;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

#[delete("/api/admin/{collection}/{id}")]
pub async fn delete_record_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let collection = match collection.parse::<Collection>() {
        Ok(collection) => collection,
        Err(err) => {
            return ApiResponse::not_found("UNKNOWN_COLLECTION", &err.to_string());
        }
    };

    match data.delete_record_use_case.execute(collection, id).await {
        Ok(()) => ApiResponse::<()>::no_content(),
        Err(DeleteRecordError::NotManaged) => ApiResponse::not_found(
            "UNKNOWN_COLLECTION",
            "This collection has no managed table",
        ),
        Err(DeleteRecordError::RecordNotFound) => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "No such record in this collection")
        }
        Err(DeleteRecordError::RepositoryError(ref e)) => {
            error!(error = %e, collection = %collection, "Failed to delete record");
            ApiResponse::internal_error()
        }
    }
}
