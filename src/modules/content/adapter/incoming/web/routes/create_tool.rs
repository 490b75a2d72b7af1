use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::create_tool::CreateToolData;
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::{ToolCategory, ToolLevel};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct CreateToolDto {
    pub name: String,
    pub category: ToolCategory,
    pub level: ToolLevel,
    pub icon: Option<String>,
}

#[post("/api/admin/tools")]
pub async fn create_tool_handler(
    _admin: AdminUser,
    body: web::Json<CreateToolDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let request = CreateToolData {
        name: dto.name,
        category: dto.category,
        level: dto.level,
        icon: dto.icon,
    };

    match data.create_tool_use_case.execute(request).await {
        Ok(document) => {
            info!(id = %document.id, "Tool record created");
            ApiResponse::created(document)
        }
        Err(CreateRecordError::MissingField(field)) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Missing required field: {field}"),
        ),
        Err(CreateRecordError::Invalid(ref message)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", message)
        }
        Err(CreateRecordError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to create tool record");
            ApiResponse::internal_error()
        }
    }
}
