use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use actix_web::web;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_0123456789";
pub const TEST_ADMIN_SUBJECT: &str = "admin-subject-123";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        issuer: "test_issuer".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// App data the `AdminUser` extractor looks for.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider>> {
    web::Data::new(Arc::new(test_jwt_service()) as Arc<dyn TokenProvider>)
}

/// Authorization header value for the configured test admin.
pub fn admin_bearer() -> String {
    let token = test_jwt_service()
        .generate_access_token(TEST_ADMIN_SUBJECT, true)
        .expect("token generation cannot fail with a fixed test secret");
    format!("Bearer {token}")
}

/// A syntactically valid session token without the admin claim.
pub fn non_admin_bearer() -> String {
    let token = test_jwt_service()
        .generate_access_token("visitor-subject-999", false)
        .expect("token generation cannot fail with a fixed test secret");
    format!("Bearer {token}")
}
