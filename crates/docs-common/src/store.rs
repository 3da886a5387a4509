use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::debug;

use crate::error::CommonError;
use crate::model::{Category, DocumentContent, DocumentEntry, DocumentSummary};

/// In-memory, read-only table of categories and document content.
///
/// Built once at startup and shared by reference (typically behind an `Arc`).
/// Every lookup returns `Option`: an unknown slug is a normal outcome.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    categories: Vec<Category>,
    documents: HashMap<String, HashMap<String, DocumentContent>>,
}

/// On-disk catalog layout accepted by [`DocumentStore::from_json`].
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    #[serde(default)]
    documents: HashMap<String, HashMap<String, DocumentContent>>,
}

impl DocumentStore {
    /// Builds a store from categories and `(category_slug, doc_slug, content)` rows.
    ///
    /// Rejects duplicate category slugs, duplicate topic slugs within a category,
    /// documents that do not belong to a listed topic, and documents whose title
    /// differs from their topic's title. `next`/`prev` links are not checked.
    pub fn new<I>(categories: Vec<Category>, documents: I) -> Result<Self, CommonError>
    where
        I: IntoIterator<Item = (String, String, DocumentContent)>,
    {
        let mut seen_categories = HashSet::new();
        for category in &categories {
            if !seen_categories.insert(category.slug.as_str()) {
                return Err(CommonError::DuplicateCategory(category.slug.clone()));
            }
            let mut seen_topics = HashSet::new();
            for topic in &category.topics {
                if !seen_topics.insert(topic.slug.as_str()) {
                    return Err(CommonError::DuplicateTopic {
                        category: category.slug.clone(),
                        slug: topic.slug.clone(),
                    });
                }
            }
        }

        let mut table: HashMap<String, HashMap<String, DocumentContent>> = HashMap::new();
        for (category_slug, doc_slug, content) in documents {
            let category = categories
                .iter()
                .find(|c| c.slug == category_slug)
                .ok_or_else(|| CommonError::UnknownCategory(category_slug.clone()))?;
            let topic = category
                .topics
                .iter()
                .find(|t| t.slug == doc_slug)
                .ok_or_else(|| CommonError::UnknownTopic {
                    category: category_slug.clone(),
                    slug: doc_slug.clone(),
                })?;
            if topic.title != content.title {
                return Err(CommonError::TitleMismatch {
                    category: category_slug,
                    slug: doc_slug,
                    document: content.title,
                    topic: topic.title.clone(),
                });
            }
            table.entry(category_slug).or_default().insert(doc_slug, content);
        }

        let document_count: usize = table.values().map(HashMap::len).sum();
        debug!(
            categories = categories.len(),
            documents = document_count,
            "document store built"
        );

        Ok(Self {
            categories,
            documents: table,
        })
    }

    /// Parses a JSON catalog and validates it like [`DocumentStore::new`].
    pub fn from_json(json: &str) -> Result<Self, CommonError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let rows = file.documents.into_iter().flat_map(|(category, docs)| {
            docs.into_iter()
                .map(move |(slug, content)| (category.clone(), slug, content))
        });
        Self::new(file.categories, rows)
    }

    /// All categories in authored order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Exact, case-sensitive slug lookup.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// The first authored category, used as the landing target for `/docs`.
    pub fn default_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn document(&self, category: &str, slug: &str) -> Option<&DocumentContent> {
        self.documents.get(category)?.get(slug)
    }

    pub fn summary(&self, category: &str, slug: &str) -> Option<&DocumentSummary> {
        self.category(category)?.topics.iter().find(|t| t.slug == slug)
    }

    /// Every topic flattened with its category slug: categories in store order,
    /// topics in category order.
    pub fn entries(&self) -> Vec<DocumentEntry> {
        self.categories
            .iter()
            .flat_map(|category| {
                category.topics.iter().map(|topic| DocumentEntry {
                    category: category.slug.clone(),
                    summary: topic.clone(),
                })
            })
            .collect()
    }

    pub fn document_count(&self) -> usize {
        self.documents.values().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(title: &str, slug: &str) -> DocumentSummary {
        DocumentSummary {
            title: title.to_string(),
            slug: slug.to_string(),
            description: format!("About {title}"),
            read_time: None,
        }
    }

    fn category(slug: &str, topics: Vec<DocumentSummary>) -> Category {
        Category {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            description: String::new(),
            topics,
        }
    }

    fn content(title: &str) -> DocumentContent {
        DocumentContent {
            title: title.to_string(),
            description: String::new(),
            content: "## Heading".to_string(),
            next: None,
            prev: None,
        }
    }

    fn sample() -> DocumentStore {
        DocumentStore::new(
            vec![
                category("a", vec![topic("One", "one"), topic("Two", "two")]),
                category("b", vec![topic("Three", "three")]),
            ],
            vec![
                ("a".to_string(), "one".to_string(), content("One")),
                ("b".to_string(), "three".to_string(), content("Three")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn lookups_return_none_for_unknown_keys() {
        let store = sample();
        assert!(store.category("missing").is_none());
        assert!(store.category("A").is_none(), "slug match is case-sensitive");
        assert!(store.document("missing", "one").is_none());
        assert!(store.document("a", "missing").is_none());
        assert!(store.document("a", "two").is_none(), "topic without content");
        assert_eq!(store.document("a", "one").unwrap().title, "One");
    }

    #[test]
    fn entries_preserve_category_then_topic_order() {
        let store = sample();
        let keys: Vec<(String, String)> = store
            .entries()
            .into_iter()
            .map(|e| (e.category, e.summary.slug))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a".to_string(), "one".to_string()),
                ("a".to_string(), "two".to_string()),
                ("b".to_string(), "three".to_string()),
            ]
        );
        assert_eq!(store.default_category().unwrap().slug, "a");
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let err = DocumentStore::new(
            vec![category("a", vec![]), category("a", vec![])],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CommonError::DuplicateCategory(slug) if slug == "a"));

        let err = DocumentStore::new(
            vec![category("a", vec![topic("One", "one"), topic("Uno", "one")])],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CommonError::DuplicateTopic { .. }));
    }

    #[test]
    fn rejects_documents_outside_the_topic_list() {
        let categories = vec![category("a", vec![topic("One", "one")])];

        let err = DocumentStore::new(
            categories.clone(),
            vec![("z".to_string(), "one".to_string(), content("One"))],
        )
        .unwrap_err();
        assert!(matches!(err, CommonError::UnknownCategory(_)));

        let err = DocumentStore::new(
            categories.clone(),
            vec![("a".to_string(), "two".to_string(), content("Two"))],
        )
        .unwrap_err();
        assert!(matches!(err, CommonError::UnknownTopic { .. }));

        let err = DocumentStore::new(
            categories,
            vec![("a".to_string(), "one".to_string(), content("Other"))],
        )
        .unwrap_err();
        assert!(matches!(err, CommonError::TitleMismatch { .. }));
    }

    #[test]
    fn loads_json_catalog() {
        let json = r###"{
            "categories": [
                {
                    "title": "Getting Started",
                    "slug": "getting-started",
                    "description": "Begin here",
                    "topics": [
                        { "title": "Installation", "slug": "installation",
                          "description": "Set up Flutter SDK on your system", "readTime": "3 min" }
                    ]
                }
            ],
            "documents": {
                "getting-started": {
                    "installation": {
                        "title": "Installation",
                        "description": "Set up Flutter SDK on your system",
                        "content": "## System Requirements",
                        "next": { "title": "Setup Editor", "slug": "setup-editor" }
                    }
                }
            }
        }"###;

        let store = DocumentStore::from_json(json).unwrap();
        let summary = store.summary("getting-started", "installation").unwrap();
        assert_eq!(summary.read_time.as_deref(), Some("3 min"));
        let doc = store.document("getting-started", "installation").unwrap();
        assert_eq!(doc.next.as_ref().unwrap().slug, "setup-editor");
        assert!(doc.prev.is_none());
        assert_eq!(store.document_count(), 1);
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = DocumentStore::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CommonError::Catalog(_)));
    }
}
