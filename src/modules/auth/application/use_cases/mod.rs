pub mod login_admin;
pub mod refresh_session;
