use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::use_cases::create_project::CreateProjectData;
use crate::content::application::use_cases::CreateRecordError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

#[derive(Deserialize)]
pub struct CreateProjectDto {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _admin: AdminUser,
    body: web::Json<CreateProjectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = body.into_inner();
    let request = CreateProjectData {
        title: dto.title,
        description: dto.description,
        link: dto.link,
        technologies: dto.technologies,
    };

    match data.create_project_use_case.execute(request).await {
        Ok(document) => {
            info!(id = %document.id, "Project record created");
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
            error!(error = %e, "Failed to create project record");
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
    async fn derives_the_preview_from_the_link() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "title": "Portfolio",
                "description": "My site",
                "link": "https://github.com/ada/portfolio",
                "technologies": ["react"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["fields"]["link_type"], "github");
        assert_eq!(
            body["data"]["fields"]["image_url"],
            "https://opengraph.githubassets.com/1/ada/portfolio"
        );
    }

    #[actix_web::test]
    async fn invalid_links_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "title": "Portfolio",
                "description": "My site",
                "link": "portfolio.zip"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn more_than_three_technologies_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects")
            .insert_header(("Authorization", admin_bearer()))
            .set_json(json!({
                "title": "Portfolio",
                "description": "My site",
                "link": "https://github.com/ada/portfolio",
                "technologies": ["react", "rust", "node", "docker"]
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
