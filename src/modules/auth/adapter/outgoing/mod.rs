pub mod google_identity;
pub mod jwt;
