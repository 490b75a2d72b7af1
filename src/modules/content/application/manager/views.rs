use crate::content::application::catalog::seeds;
use crate::content::application::manager::descriptor::{
    render_value, FieldDescriptor, EMPTY_PLACEHOLDER,
};
use crate::content::application::ports::outgoing::Document;
use crate::content::domain::{Collection, LanguageLevel, ToolCategory, ToolLevel};
use serde_json::Value;

/// Table configuration for one managed collection: what to call it,
/// how to sort it, and which fields to show.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub title: &'static str,
    pub sort_field: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

/// The per-collection configuration driving the generic manager.
/// Returns `None` for collections that are not list-managed (the
/// profile singleton and the logo caches).
pub fn view_for(collection: Collection) -> Option<CollectionView> {
    let view = match collection {
        Collection::Experience => CollectionView {
            title: "Manage experience",
            sort_field: "created_at",
            fields: vec![
                FieldDescriptor::rendered("company", "Company", render_company),
                FieldDescriptor::new("position", "Position"),
                FieldDescriptor::new("start_date", "Start"),
                FieldDescriptor::rendered("end_date", "End", render_end_date),
                FieldDescriptor::new("location", "Location"),
            ],
        },
        Collection::Education => CollectionView {
            title: "Manage education",
            sort_field: "created_at",
            fields: vec![
                FieldDescriptor::new("institution", "Institution"),
                FieldDescriptor::new("degree", "Title"),
                FieldDescriptor::rendered("year", "Year", render_year),
                FieldDescriptor::new("description", "Description"),
                FieldDescriptor::new("logo_url", "Logo"),
            ],
        },
        Collection::Projects => CollectionView {
            title: "Manage projects",
            sort_field: "created_at",
            fields: vec![
                FieldDescriptor::new("title", "Title"),
                FieldDescriptor::new("description", "Description"),
                FieldDescriptor::rendered("link_type", "Type", render_link_type),
                FieldDescriptor::rendered("link", "Link", render_link),
                FieldDescriptor::rendered("technologies", "Technologies", render_technologies),
            ],
        },
        Collection::Tools => CollectionView {
            title: "Manage tools",
            sort_field: "created_at",
            fields: vec![
                FieldDescriptor::new("name", "Name"),
                FieldDescriptor::rendered("category", "Category", render_tool_category),
                FieldDescriptor::rendered("level", "Level", render_tool_level),
                FieldDescriptor::new("icon", "Icon"),
            ],
        },
        Collection::Languages => CollectionView {
            title: "Manage languages",
            sort_field: "created_at",
            fields: vec![
                FieldDescriptor::new("name", "Language"),
                FieldDescriptor::new("country", "Country"),
                FieldDescriptor::rendered("level", "Level", render_language_level),
                FieldDescriptor::new("flag_url", "Flag"),
            ],
        },
        Collection::Profile | Collection::Companies | Collection::Institutions => return None,
    };
    Some(view)
}

/// Company cells tolerate both the plain name and the `{name, ...}`
/// object shape left behind by older records.
fn render_company(value: &Value, _: &Document) -> String {
    match value {
        Value::Object(map) => map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(EMPTY_PLACEHOLDER)
            .to_string(),
        other => render_value(other),
    }
}

fn render_end_date(value: &Value, _: &Document) -> String {
    match value {
        Value::Null => "Present".to_string(),
        other => render_value(other),
    }
}

fn render_year(value: &Value, document: &Document) -> String {
    if document.field("in_progress") == &Value::Bool(true) {
        return "In progress".to_string();
    }
    render_value(value)
}

fn render_link(value: &Value, _: &Document) -> String {
    match value.as_str() {
        Some(link) => {
            let trimmed = link
                .strip_prefix("https://")
                .or_else(|| link.strip_prefix("http://"))
                .unwrap_or(link);
            trimmed.to_string()
        }
        None => render_value(value),
    }
}

fn render_link_type(value: &Value, _: &Document) -> String {
    match value.as_str() {
        Some("github") => "GitHub".to_string(),
        Some("itch.io") => "itch.io".to_string(),
        Some("behance") => "Behance".to_string(),
        Some("other") => "Web".to_string(),
        _ => render_value(value),
    }
}

/// Technology tags display their catalog names, falling back to the
/// raw id for tags the seed table no longer knows.
fn render_technologies(value: &Value, _: &Document) -> String {
    match value {
        Value::Array(ids) => ids
            .iter()
            .map(|id| {
                let raw = id.as_str().unwrap_or_default();
                seeds::technology_name(raw)
                    .unwrap_or(raw)
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => render_value(other),
    }
}

fn render_tool_category(value: &Value, _: &Document) -> String {
    serde_json::from_value::<ToolCategory>(value.clone())
        .map(|category| category.display_name().to_string())
        .unwrap_or_else(|_| render_value(value))
}

fn render_tool_level(value: &Value, _: &Document) -> String {
    serde_json::from_value::<ToolLevel>(value.clone())
        .map(|level| level.display_name().to_string())
        .unwrap_or_else(|_| render_value(value))
}

fn render_language_level(value: &Value, _: &Document) -> String {
    serde_json::from_value::<LanguageLevel>(value.clone())
        .map(|level| format!("{} - {}", level.code(), level.display_name()))
        .unwrap_or_else(|_| render_value(value))
}
