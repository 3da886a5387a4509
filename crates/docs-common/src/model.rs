use serde::{Deserialize, Serialize};

/// A documentation category, e.g. "Getting Started".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display title, e.g. "Getting Started"
    pub title: String,
    /// URL-safe key, unique within the store, e.g. "getting-started"
    pub slug: String,
    pub description: String,
    /// Topics in learning-path order
    pub topics: Vec<DocumentSummary>,
}

/// A topic listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub title: String,
    /// Unique within the owning category, e.g. "installation"
    pub slug: String,
    pub description: String,
    /// Estimated reading time, e.g. "3 min"
    #[serde(default, alias = "readTime", skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

/// Link to a sibling document in the same category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    pub title: String,
    pub slug: String,
}

/// Full content of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    pub title: String,
    pub description: String,
    /// Raw markdown-subset source, see [`crate::render`]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<DocLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<DocLink>,
}

/// A topic summary flattened together with the slug of its owning category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub category: String,
    #[serde(flatten)]
    pub summary: DocumentSummary,
}

impl DocumentEntry {
    pub fn path(&self) -> String {
        format!("/docs/{}/{}", self.category, self.summary.slug)
    }
}
