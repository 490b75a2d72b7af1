use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::ports::outgoing::FieldMap;
use crate::content::application::use_cases::patch_record::PatchRecordError;
use crate::content::domain::Collection;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{patch, web, Responder};
use tracing::error;
use uuid::Uuid;

/// Inline edit from the manager table: a partial field map merged into
/// one record.
#[patch("/api/admin/{collection}/{id}")]
pub async fn patch_record_handler(
    _admin: AdminUser,
    path: web::Path<(String, Uuid)>,
    body: web::Json<FieldMap>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection, id) = path.into_inner();
    let collection = match collection.parse::<Collection>() {
        Ok(collection) => collection,
        Err(err) => {
            return ApiResponse::not_found("UNKNOWN_COLLECTION", &err.to_string());
        }
    };

    match data
        .patch_record_use_case
        .execute(collection, id, body.into_inner())
        .await
    {
        Ok(document) => ApiResponse::success(document),
        Err(PatchRecordError::NotManaged) => ApiResponse::not_found(
            "UNKNOWN_COLLECTION",
            "This collection has no managed table",
        ),
        Err(PatchRecordError::RecordNotFound) => {
            ApiResponse::not_found("RECORD_NOT_FOUND", "No such record in this collection")
        }
        Err(PatchRecordError::NothingToUpdate) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "No fields to update")
        }
        Err(PatchRecordError::RepositoryError(ref e)) => {
            error!(error = %e, collection = %collection, "Failed to patch record");
            ApiResponse::internal_error()
        }
    }
}
