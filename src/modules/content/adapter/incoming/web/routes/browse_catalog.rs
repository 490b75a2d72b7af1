use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::content::application::catalog::{BrowseCatalogError, CatalogKind};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct CatalogQuery {
    #[serde(default)]
    pub q: String,
}

/// Seeded suggestions plus cached entries for the create-form pickers.
#[get("/api/admin/catalog/{kind}")]
pub async fn browse_catalog_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<CatalogQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let kind = match path.into_inner().parse::<CatalogKind>() {
        Ok(kind) => kind,
        Err(err) => {
            return ApiResponse::not_found("UNKNOWN_CATALOG", &err.to_string());
        }
    };

    match data.browse_catalog_use_case.execute(kind, &query.q).await {
        Ok(items) => ApiResponse::success(items),
        Err(BrowseCatalogError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to browse catalog");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::FieldMap;
    use crate::content::domain::Collection;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_bearer, token_provider_data};
    use crate::tests::support::stubs::InMemoryStore;
    use actix_web::{test, App};
    use serde_json::json;
    use std::sync::Arc;

    #[actix_web::test]
    async fn unions_seeds_with_cached_entries() {
        let store = Arc::new(InMemoryStore::new());
        let mut cached = FieldMap::new();
        cached.insert("name".to_string(), json!("Acme"));
        cached.insert("logo_url".to_string(), json!("https://acme.test/logo.png"));
        store.seed(Collection::Companies, cached);

        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::with_store(store).build())
                .app_data(token_provider_data())
                .service(browse_catalog_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/catalog/companies?q=acme")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Acme");
    }

    #[actix_web::test]
    async fn technology_lookups_come_from_the_seed_table() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(browse_catalog_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/catalog/technologies?q=react")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let body: serde_json::Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        assert!(items.iter().any(|item| item["id"] == "react"));
    }

    #[actix_web::test]
    async fn unknown_catalog_kind_is_a_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data())
                .service(browse_catalog_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/catalog/planets")
            .insert_header(("Authorization", admin_bearer()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_CATALOG");
    }
}
