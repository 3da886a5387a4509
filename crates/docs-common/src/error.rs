/// Errors raised while building a [`DocumentStore`](crate::store::DocumentStore).
///
/// Lookups never produce these: an absent category or document is `None`.
/// Application-specific errors should be defined in each binary crate and
/// wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("duplicate category slug: {0}")]
    DuplicateCategory(String),

    #[error("duplicate topic slug '{slug}' in category '{category}'")]
    DuplicateTopic { category: String, slug: String },

    #[error("document references unknown category: {0}")]
    UnknownCategory(String),

    #[error("document '{slug}' is not a topic of category '{category}'")]
    UnknownTopic { category: String, slug: String },

    #[error("document '{category}/{slug}' is titled '{document}' but its topic is '{topic}'")]
    TitleMismatch {
        category: String,
        slug: String,
        document: String,
        topic: String,
    },

    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}
