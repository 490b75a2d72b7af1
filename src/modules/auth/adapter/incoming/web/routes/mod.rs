mod login;
mod refresh;

pub use login::login_admin_handler;
pub use refresh::refresh_session_handler;
