use crate::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginError, SessionTokens,
};
use crate::auth::application::use_cases::refresh_session::{
    IRefreshSessionUseCase, RefreshSessionUseCase,
};
use crate::content::application::catalog::{BrowseCatalogUseCase, LogoCatalog};
use crate::content::application::ports::outgoing::DocumentStore;
use crate::content::application::use_cases::{
    create_education::CreateEducationUseCase, create_experience::CreateExperienceUseCase,
    create_language::CreateLanguageUseCase, create_project::CreateProjectUseCase,
    create_tool::CreateToolUseCase, delete_record::DeleteRecordUseCase,
    get_profile::GetProfileUseCase, list_public::ListPublicUseCase,
    list_records::ListRecordsUseCase, patch_record::PatchRecordUseCase,
    save_profile::SaveProfileUseCase,
};
use crate::tests::support::auth_helper::test_jwt_service;
use crate::tests::support::stubs::InMemoryStore;
use crate::AppState;
use actix_web::web;
use async_trait::async_trait;
use std::sync::Arc;

/// Default login use case: denies everyone. Login tests plug in their
/// own mock.
struct DeniedLogin;

#[async_trait]
impl ILoginAdminUseCase for DeniedLogin {
    async fn execute(&self, _id_token: &str) -> Result<SessionTokens, LoginError> {
        Err(LoginError::NotAuthorized)
    }
}

/// Builds an [`AppState`] whose content use cases run against an
/// in-memory store, with per-test overrides for the auth side.
pub struct TestAppStateBuilder {
    store: Arc<InMemoryStore>,
    login_admin: Option<Arc<dyn ILoginAdminUseCase>>,
    refresh_session: Option<Arc<dyn IRefreshSessionUseCase>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }
}

impl TestAppStateBuilder {
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            login_admin: None,
            refresh_session: None,
        }
    }

    pub fn with_login_admin(mut self, use_case: Arc<dyn ILoginAdminUseCase>) -> Self {
        self.login_admin = Some(use_case);
        self
    }

    pub fn with_refresh_session(mut self, use_case: Arc<dyn IRefreshSessionUseCase>) -> Self {
        self.refresh_session = Some(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let store: Arc<dyn DocumentStore> = self.store;
        let catalog = LogoCatalog::new(Arc::clone(&store));

        let login_admin = self
            .login_admin
            .unwrap_or_else(|| Arc::new(DeniedLogin));
        let refresh_session = self.refresh_session.unwrap_or_else(|| {
            Arc::new(RefreshSessionUseCase::new(Arc::new(test_jwt_service())))
        });

        web::Data::new(AppState {
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
            list_public_use_case: Arc::new(ListPublicUseCase::new(store)),
            login_admin_use_case: login_admin,
            refresh_session_use_case: refresh_session,
        })
    }
}
