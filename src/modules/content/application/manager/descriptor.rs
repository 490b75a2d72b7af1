use crate::content::application::ports::outgoing::Document;
use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Placeholder shown for null/missing values.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// How to display one field of a record.
pub type RenderFn = fn(&Value, &Document) -> String;

/// One column of the generic manager table: which field to read, what
/// to label it, and optionally how to display it. A field with no
/// render override falls through to [`render_value`].
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub render: Option<RenderFn>,
}

impl FieldDescriptor {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            render: None,
        }
    }

    pub const fn rendered(key: &'static str, label: &'static str, render: RenderFn) -> Self {
        Self {
            key,
            label,
            render: Some(render),
        }
    }

    /// The display projection of this field for one record. The
    /// override, when present, takes precedence over every default
    /// rule.
    pub fn project(&self, document: &Document) -> String {
        let value = document.field(self.key);
        match self.render {
            Some(render) => render(value, document),
            None => render_value(value),
        }
    }
}

/// Default display rules: null becomes the em-dash placeholder,
/// booleans a yes/no word, date-like strings a short date, arrays a
/// comma-joined list, objects their raw JSON dump, everything else a
/// plain string coercion.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_PLACEHOLDER.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format_if_date(s).unwrap_or_else(|| s.clone()),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

/// Short date form for values stored as RFC 3339 timestamps or plain
/// `YYYY-MM-DD` dates.
pub fn format_if_date(raw: &str) -> Option<String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.format("%-d/%-m/%Y").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%-d/%-m/%Y").to_string())
}
