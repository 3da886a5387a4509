use crate::model::{Category, DocumentEntry, DocumentSummary};
use crate::store::DocumentStore;

/// Queries shorter than this (in characters) match nothing.
pub const MIN_QUERY_LEN: usize = 2;

/// Number of topics shown in a category's learning path.
pub const LEARNING_PATH_LEN: usize = 4;

/// Case-insensitive substring search over every topic's title and description.
///
/// Results keep the flattened store order; there is no ranking.
pub fn search_documents(store: &DocumentStore, query: &str) -> Vec<DocumentEntry> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    store
        .entries()
        .into_iter()
        .filter(|entry| matches(&entry.summary.title, &entry.summary.description, &needle))
        .collect()
}

/// Home-page filter. An empty query keeps every category.
pub fn filter_categories<'a>(store: &'a DocumentStore, query: &str) -> Vec<&'a Category> {
    let needle = query.to_lowercase();
    store
        .categories()
        .iter()
        .filter(|c| matches(&c.title, &c.description, &needle))
        .collect()
}

/// Category-page filter. An empty query keeps every topic.
pub fn filter_topics<'a>(category: &'a Category, query: &str) -> Vec<&'a DocumentSummary> {
    let needle = query.to_lowercase();
    category
        .topics
        .iter()
        .filter(|t| matches(&t.title, &t.description, &needle))
        .collect()
}

pub fn learning_path(category: &Category) -> &[DocumentSummary] {
    let len = category.topics.len().min(LEARNING_PATH_LEN);
    &category.topics[..len]
}

fn matches(title: &str, description: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle) || description.to_lowercase().contains(needle)
}
