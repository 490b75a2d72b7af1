use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::list_records::ListRecordsError;
use crate::content::domain::Collection;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// One managed collection rendered as the panel's table, optionally
/// narrowed by the search box.
#[get("/api/admin/{collection}")]
pub async fn list_records_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match path.into_inner().parse::<Collection>() {
        Ok(collection) => collection,
        Err(err) => {
            return ApiResponse::not_found("UNKNOWN_COLLECTION", &err.to_string());
        }
    };

    match data
        .list_records_use_case
        .execute(collection, &query.q)
        .await
    {
        Ok(table) => ApiResponse::success(table),
        Err(ListRecordsError::NotManaged) => ApiResponse::not_found(
            "UNKNOWN_COLLECTION",
            "This collection has no managed table",
        ),
        Err(ListRecordsError::RepositoryError(ref e)) => {
            error!(error = %e, collection = %collection, "Failed to load records");
            ApiResponse::internal_error()
        }
    }
}
