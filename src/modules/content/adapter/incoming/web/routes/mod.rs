mod browse_catalog;
mod create_education;
mod create_experience;
mod create_language;
mod create_project;
mod create_tool;
mod delete_record;
mod list_records;
mod patch_record;
mod profile;
mod public_site;

pub use browse_catalog::browse_catalog_handler;
pub use create_education::create_education_handler;
pub use create_experience::create_experience_handler;
pub use create_language::create_language_handler;
pub use create_project::create_project_handler;
pub use create_tool::create_tool_handler;
pub use delete_record::delete_record_handler;
pub use list_records::list_records_handler;
pub use patch_record::patch_record_handler;
pub use profile::{get_admin_profile_handler, save_profile_handler};
pub use public_site::{get_public_profile_handler, list_public_handler};
