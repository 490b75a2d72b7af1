use crate::content::application::manager::descriptor::FieldDescriptor;
use crate::content::application::ports::outgoing::Document;

/// Case-insensitive substring match of `query` against the display
/// projection of every listed field.
pub fn matches_query(document: &Document, fields: &[FieldDescriptor], query: &str) -> bool {
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.project(document).to_lowercase().contains(&needle))
}

/// The visible subset for one search term. A blank query keeps every
/// record; filtering never touches the store.
pub fn filter_documents<'a>(
    documents: &'a [Document],
    fields: &[FieldDescriptor],
    query: &str,
) -> Vec<&'a Document> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return documents.iter().collect();
    }
    documents
        .iter()
        .filter(|document| matches_query(document, fields, trimmed))
        .collect()
}
