use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::create_language::CreateLanguageData;
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::LanguageLevel;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct CreateLanguageDto {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub flag_url: String,
    pub level: Option<LanguageLevel>,
}

#[post("/api/admin/languages")]
pub async fn create_language_handler(
    _admin: AdminUser,
    body: web::Json<CreateLanguageDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let request = CreateLanguageData {
        name: dto.name,
        country: dto.country,
        flag_url: dto.flag_url,
        level: dto.level,
    };

    match data.create_language_use_case.execute(request).await {
        Ok(document) => {
            info!(id = %document.id, "Language record created");
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
            error!(error = %e, "Failed to create language record");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn creates_a_language_with_its_level_code() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_language_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/languages")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "name": "German",
                "country": "Germany",
                "flag_url": "https://flagcdn.com/de.svg",
                "level": "B2"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["fields"]["level"], "B2");
    }

    #[actix_web::test]
    async fn a_missing_level_is_a_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_language_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/languages")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({ "name": "French" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
