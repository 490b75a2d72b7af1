use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::create_education::CreateEducationData;
use crate::content::application::use_cases::CreateRecordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct CreateEducationDto {
    pub institution: String,
    pub degree: String,
    pub year: Option<String>,
    #[serde(default)]
    pub in_progress: bool,
    #[serde(default)]
    pub description: String,
    pub custom_logo_url: Option<String>,
}

#[post("/api/admin/education")]
pub async fn create_education_handler(
    _admin: AdminUser,
    body: web::Json<CreateEducationDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let request = CreateEducationData {
        institution: dto.institution,
        degree: dto.degree,
        year: dto.year,
        in_progress: dto.in_progress,
        description: dto.description,
        custom_logo_url: dto.custom_logo_url,
    };

    match data.create_education_use_case.execute(request).await {
        Ok(document) => {
            info!(id = %document.id, "Education record created");
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
            error!(error = %e, "Failed to create education record");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::domain::Collection;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryStore;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;

    #[actix_web::test]
    async fn ongoing_studies_store_the_in_progress_flag() {
        let store = Arc::new(InMemoryStore::new());

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store.clone()).build())
                .app_data(token_provider_data())
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/education")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "institution": "MIT",
                "degree": "M.Sc. Computer Science",
                "in_progress": true
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["fields"]["in_progress"], true);
        assert_eq!(body["data"]["fields"]["year"], serde_json::Value::Null);
        assert_eq!(store.documents_in(Collection::Education).len(), 1);
    }

    #[actix_web::test]
    async fn finished_studies_need_a_year() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_education_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/education")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "institution": "MIT",
                "degree": "B.Sc. Computer Science",
                "in_progress": false
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
