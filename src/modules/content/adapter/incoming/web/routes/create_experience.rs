use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::create_experience::CreateExperienceData;
use crate::content::application::use_cases::CreateRecordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct CreateExperienceDto {
    pub company: String,
    pub position: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_position: bool,
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub custom_logo_url: Option<String>,
}

#[post("/api/admin/experience")]
pub async fn create_experience_handler(
    _admin: AdminUser,
    body: web::Json<CreateExperienceDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let request = CreateExperienceData {
        company: dto.company,
        position: dto.position,
        start_date: dto.start_date,
        end_date: dto.end_date,
        current_position: dto.current_position,
        location: dto.location,
        description: dto.description,
        custom_logo_url: dto.custom_logo_url,
    };

    match data.create_experience_use_case.execute(request).await {
        Ok(document) => {
            info!(id = %document.id, "Experience record created");
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
            error!(error = %e, "Failed to create experience record");
            ApiResponse::internal_error()
        }
    }
}
