use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::get_profile::GetProfileError;
use crate::content::application::use_cases::CreateRecordError;
use crate::content::domain::ProfileData;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::{error, info};

/// Singleton profile as the edit form sees it; an all-empty profile
/// before the first save.
#[get("/api/admin/profile")]
pub async fn get_admin_profile_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_profile_use_case.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/profile")]
pub async fn save_profile_handler(
    _admin: AdminUser,
    body: web::Json<ProfileData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.save_profile_use_case.execute(body.into_inner()).await {
        Ok(profile) => {
            info!("Profile saved");
            ApiResponse::success(profile)
        }
        Err(CreateRecordError::MissingField(field)) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Missing required field: {field}"),
        ),
        Err(CreateRecordError::Invalid(ref message)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", message)
        }
        Err(CreateRecordError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to save profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryStore;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;

    #[actix_web::test]
    async fn unsaved_profile_reads_back_empty() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(get_admin_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["full_name"], "");
    }

    #[actix_web::test]
    async fn saved_profile_round_trips() {
        let store = Arc::new(InMemoryStore::new());

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .app_data(token_provider_data())
                .service(save_profile_handler)
                .service(get_admin_profile_handler),
        )
        .await;

        let save = test::TestRequest::put()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "full_name": "Ada Lovelace",
                "title": "Engineer",
                "email": "ada@example.com"
            }))
            .to_request();
        let resp = test::call_service(&app, save).await;
        assert_eq!(resp.status(), 200);

        let read = test::TestRequest::get()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();
        let resp = test::call_service(&app, read).await;
        let body: serde_json::Value = test::read_body_json(resp).await;

        assert_eq!(body["data"]["full_name"], "Ada Lovelace");
        assert_eq!(body["data"]["email"], "ada@example.com");
    }

    #[actix_web::test]
    async fn profile_requires_name_and_title() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(save_profile_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/profile")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({ "full_name": "Ada Lovelace" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
