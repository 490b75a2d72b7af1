pub mod create_education;
pub mod create_experience;
pub mod create_language;
pub mod create_project;
pub mod create_tool;
pub mod delete_record;
pub mod get_profile;
pub mod list_public;
pub mod list_records;
pub mod patch_record;
pub mod save_profile;

/// Shared failure shape of the five create operations. Validation is
/// presence-only; anything deeper is out of scope for the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateRecordError {
    MissingField(&'static str),
    Invalid(String),
    RepositoryError(String),
}
