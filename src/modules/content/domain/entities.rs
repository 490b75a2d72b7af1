use serde::{Deserialize, Serialize};

/// Singleton profile record shown on the public landing page.
///
/// Every field is free text; the panel only requires that the name and
/// title are present before saving.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProfileData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub quote_author: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub x: String,
    #[serde(default)]
    pub itchio: String,
    #[serde(default)]
    pub image_url: String,
}

/// Tool category tags, stored by their lowercase id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Design,
    Development,
    Language,
    Game,
    Productivity,
    Methodology,
    Skill,
    Other,
}

impl ToolCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolCategory::Design => "Design",
            ToolCategory::Development => "Development",
            ToolCategory::Language => "Language",
            ToolCategory::Game => "Games",
            ToolCategory::Productivity => "Productivity",
            ToolCategory::Methodology => "Methodology",
            ToolCategory::Skill => "Skill",
            ToolCategory::Other => "Other",
        }
    }
}

/// Four-step proficiency scale for tools.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ToolLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl ToolLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolLevel::Basic => "Basic",
            ToolLevel::Intermediate => "Intermediate",
            ToolLevel::Advanced => "Advanced",
            ToolLevel::Expert => "Expert",
        }
    }
}

/// CEFR-style six-level scale for spoken languages, stored as the
/// ordinal code ("A1".."C2").
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LanguageLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl LanguageLevel {
    pub fn code(&self) -> &'static str {
        match self {
            LanguageLevel::A1 => "A1",
            LanguageLevel::A2 => "A2",
            LanguageLevel::B1 => "B1",
            LanguageLevel::B2 => "B2",
            LanguageLevel::C1 => "C1",
            LanguageLevel::C2 => "C2",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageLevel::A1 => "Beginner",
            LanguageLevel::A2 => "Elementary",
            LanguageLevel::B1 => "Intermediate",
            LanguageLevel::B2 => "Upper intermediate",
            LanguageLevel::C1 => "Advanced",
            LanguageLevel::C2 => "Proficient",
        }
    }
}

/// Tag describing where a project link points, derived once from the
/// URL at creation time and frozen on the record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    #[serde(rename = "github")]
    GitHub,
    #[serde(rename = "itch.io")]
    ItchIo,
    #[serde(rename = "behance")]
    Behance,
    #[serde(rename = "other")]
    Other,
}
