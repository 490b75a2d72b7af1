pub mod modules;
pub use modules::auth;
pub use modules::content;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::google_identity::GoogleIdentityVerifier;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::identity_verifier::IdentityVerifier;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    login_admin::{ILoginAdminUseCase, LoginAdminUseCase},
    refresh_session::{IRefreshSessionUseCase, RefreshSessionUseCase},
};

use crate::content::adapter::outgoing::document_store_postgres::DocumentStorePostgres;
use crate::content::application::catalog::{
    BrowseCatalogUseCase, IBrowseCatalogUseCase, LogoCatalog,
};
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::use_cases::{
    create_education::{CreateEducationUseCase, ICreateEducationUseCase},
    create_experience::{CreateExperienceUseCase, ICreateExperienceUseCase},
    create_language::{CreateLanguageUseCase, ICreateLanguageUseCase},
    create_project::{CreateProjectUseCase, ICreateProjectUseCase},
    create_tool::{CreateToolUseCase, ICreateToolUseCase},
    delete_record::{DeleteRecordUseCase, IDeleteRecordUseCase},
    get_profile::{GetProfileUseCase, IGetProfileUseCase},
    list_public::{IListPublicUseCase, ListPublicUseCase},
    list_records::{IListRecordsUseCase, ListRecordsUseCase},
    patch_record::{IPatchRecordUseCase, PatchRecordUseCase},
    save_profile::{ISaveProfileUseCase, SaveProfileUseCase},
};
use crate::shared::api::{custom_json_config, ApiResponse};

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub list_records_use_case: Arc<dyn IListRecordsUseCase>,
    pub patch_record_use_case: Arc<dyn IPatchRecordUseCase>,
    pub delete_record_use_case: Arc<dyn IDeleteRecordUseCase>,
    pub create_experience_use_case: Arc<dyn ICreateExperienceUseCase>,
    pub create_education_use_case: Arc<dyn ICreateEducationUseCase>,
    pub create_project_use_case: Arc<dyn ICreateProjectUseCase>,
    pub create_tool_use_case: Arc<dyn ICreateToolUseCase>,
    pub create_language_use_case: Arc<dyn ICreateLanguageUseCase>,
    pub get_profile_use_case: Arc<dyn IGetProfileUseCase>,
    pub save_profile_use_case: Arc<dyn ISaveProfileUseCase>,
    pub browse_catalog_use_case: Arc<dyn IBrowseCatalogUseCase>,
    pub list_public_use_case: Arc<dyn IListPublicUseCase>,
    pub login_admin_use_case: Arc<dyn ILoginAdminUseCase>,
    pub refresh_session_use_case: Arc<dyn IRefreshSessionUseCase>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let admin_subject = env::var("ADMIN_SUBJECT").expect("ADMIN_SUBJECT is not set in .env file");
    let google_client_id =
        env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let store: Arc<dyn DocumentStore> = Arc::new(DocumentStorePostgres::new(Arc::clone(&db_arc)));
    let catalog = LogoCatalog::new(Arc::clone(&store));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let identity_verifier: Arc<dyn IdentityVerifier> = Arc::new(
        GoogleIdentityVerifier::new(google_client_id)
            .expect("Failed to build the identity verifier HTTP client"),
    );

    let login_admin_use_case = LoginAdminUseCase::new(
        identity_verifier,
        Arc::new(jwt_service.clone()),
        admin_subject,
    );
    let refresh_session_use_case = RefreshSessionUseCase::new(Arc::new(jwt_service.clone()));

    let state = AppState {
        list_records_use_case: Arc::new(ListRecordsUseCase::new(Arc::clone(&store))),
        patch_record_use_case: Arc::new(PatchRecordUseCase::new(Arc::clone(&store))),
        delete_record_use_case: Arc::new(DeleteRecordUseCase::new(Arc::clone(&store))),
        create_experience_use_case: Arc::new(CreateExperienceUseCase::new(
            Arc::clone(&store),
            catalog.clone(),
        )),
        create_education_use_case: Arc::new(CreateEducationUseCase::new(
            Arc::clone(&store),
            catalog.clone(),
        )),
        create_project_use_case: Arc::new(CreateProjectUseCase::new(Arc::clone(&store))),
        create_tool_use_case: Arc::new(CreateToolUseCase::new(Arc::clone(&store))),
        create_language_use_case: Arc::new(CreateLanguageUseCase::new(Arc::clone(&store))),
        get_profile_use_case: Arc::new(GetProfileUseCase::new(Arc::clone(&store))),
        save_profile_use_case: Arc::new(SaveProfileUseCase::new(Arc::clone(&store))),
        browse_catalog_use_case: Arc::new(BrowseCatalogUseCase::new(catalog)),
        list_public_use_case: Arc::new(ListPublicUseCase::new(Arc::clone(&store))),
        login_admin_use_case: Arc::new(login_admin_use_case),
        refresh_session_use_case: Arc::new(refresh_session_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .default_service(web::route().to(not_found))
    })
    .bind(server_url)?
    .run()
    .await
}

async fn not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("NOT_FOUND", "The requested resource does not exist")
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin panel
    cfg.service(crate::content::adapter::incoming::web::routes::create_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_education_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_tool_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_language_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_admin_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::save_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::browse_catalog_handler);
    // Registered after the fixed-path admin routes so /api/admin/profile
    // and /api/admin/catalog/{kind} never fall into {collection}
    cfg.service(crate::content::adapter::incoming::web::routes::list_records_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::patch_record_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_record_handler);
    // Public site
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_profile_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::list_public_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::refresh_session_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
