use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Category, DocLink, DocumentEntry, DocumentSummary};
use crate::render::Block;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocumentsParams {
    /// Case-insensitive text matched against topic titles and descriptions.
    /// Queries shorter than 2 characters return no results.
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCategoryParams {
    /// Category slug such as "getting-started" or "widgets".
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDocumentParams {
    /// Category slug such as "getting-started".
    pub category: String,
    /// Document slug such as "installation".
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TopicInfo {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub read_time: Option<String>,
    /// Site path of the document, e.g. "/docs/widgets/basic-widgets"
    pub path: String,
}

impl TopicInfo {
    pub fn new(category: &str, topic: &DocumentSummary) -> Self {
        Self {
            title: topic.title.clone(),
            slug: topic.slug.clone(),
            description: topic.description.clone(),
            read_time: topic.read_time.clone(),
            path: format!("/docs/{category}/{}", topic.slug),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub topic_count: usize,
}

impl From<&Category> for CategoryInfo {
    fn from(category: &Category) -> Self {
        Self {
            title: category.title.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            topic_count: category.topics.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryDetailResponse {
    pub category: CategoryInfo,
    pub topics: Vec<TopicInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkInfo {
    pub title: String,
    pub slug: String,
}

impl From<&DocLink> for LinkInfo {
    fn from(link: &DocLink) -> Self {
        Self {
            title: link.title.clone(),
            slug: link.slug.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentDetailResponse {
    pub category: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub raw_markdown: String,
    /// Rendered content blocks in source order.
    pub blocks: Vec<Block>,
    pub prev: Option<LinkInfo>,
    pub next: Option<LinkInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    pub category: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub path: String,
}

impl From<DocumentEntry> for SearchResult {
    fn from(entry: DocumentEntry) -> Self {
        let path = entry.path();
        Self {
            category: entry.category,
            slug: entry.summary.slug,
            title: entry.summary.title,
            description: entry.summary.description,
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchDocumentsResponse {
    pub results: Vec<SearchResult>,
}
