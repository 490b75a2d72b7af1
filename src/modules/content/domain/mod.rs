pub mod collection;
pub mod entities;

pub use collection::{Collection, UnknownCollection};
pub use entities::{LanguageLevel, LinkType, ProfileData, ToolCategory, ToolLevel};
