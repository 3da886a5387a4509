use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::debug;

use docs_common::mcp_api::{
    CategoryDetailResponse, CategoryInfo, CategoryListResponse, DocumentDetailResponse,
    GetCategoryParams, GetDocumentParams, LinkInfo, SearchDocumentsParams,
    SearchDocumentsResponse, SearchResult, TopicInfo,
};
use docs_common::render::render;
use docs_common::search;
use docs_common::store::DocumentStore;

#[derive(Clone)]
pub struct FlutterDocsServer {
    store: Arc<DocumentStore>,
    tool_router: ToolRouter<FlutterDocsServer>,
}

impl FlutterDocsServer {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    fn available_categories(&self) -> String {
        self.store
            .categories()
            .iter()
            .map(|c| c.slug.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[tool_router]
impl FlutterDocsServer {
    #[tool(description = "List all documentation categories in learning order.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let categories = self.store.categories().iter().map(CategoryInfo::from).collect();
        Ok(Json(CategoryListResponse { categories }))
    }

    #[tool(description = "List the topics of a documentation category (e.g. 'getting-started', 'widgets').")]
    async fn get_category(
        &self,
        Parameters(params): Parameters<GetCategoryParams>,
    ) -> Result<Json<CategoryDetailResponse>, String> {
        let slug = params.category.trim();
        if slug.is_empty() {
            return Err("category must not be empty".to_string());
        }

        let category = self.store.category(slug).ok_or_else(|| {
            format!(
                "category not found: '{slug}'. Available categories: {}",
                self.available_categories()
            )
        })?;

        let topics = category
            .topics
            .iter()
            .map(|t| TopicInfo::new(&category.slug, t))
            .collect();

        Ok(Json(CategoryDetailResponse {
            category: CategoryInfo::from(category),
            topics,
        }))
    }

    #[tool(description = "Get a document by category and slug (e.g. 'getting-started' / 'installation'). Returns the raw markdown and its rendered blocks.")]
    async fn get_document(
        &self,
        Parameters(params): Parameters<GetDocumentParams>,
    ) -> Result<Json<DocumentDetailResponse>, String> {
        let category = params.category.trim();
        let slug = params.slug.trim();
        if category.is_empty() || slug.is_empty() {
            return Err("category and slug must not be empty".to_string());
        }

        let doc = self
            .store
            .document(category, slug)
            .ok_or_else(|| format!("document not found: {category}/{slug}"))?;

        let blocks = render(&doc.content);
        debug!(category, slug, blocks = blocks.len(), "document rendered");

        Ok(Json(DocumentDetailResponse {
            category: category.to_string(),
            slug: slug.to_string(),
            title: doc.title.clone(),
            description: doc.description.clone(),
            raw_markdown: doc.content.clone(),
            blocks,
            prev: doc.prev.as_ref().map(LinkInfo::from),
            next: doc.next.as_ref().map(LinkInfo::from),
        }))
    }

    #[tool(description = "Search document titles and descriptions (case-insensitive substring match). Queries shorter than 2 characters return no results.")]
    async fn search_documents(
        &self,
        Parameters(params): Parameters<SearchDocumentsParams>,
    ) -> Result<Json<SearchDocumentsResponse>, String> {
        let query = params.query.trim();
        let results: Vec<SearchResult> = search::search_documents(&self.store, query)
            .into_iter()
            .map(SearchResult::from)
            .collect();
        debug!(query, results = results.len(), "search completed");
        Ok(Json(SearchDocumentsResponse { results }))
    }
}

#[tool_handler]
impl ServerHandler for FlutterDocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "flutter-docs".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Learn Flutter documentation server. Use list_categories to browse, \
                 get_category for a category's topics, get_document for a page's content \
                 (category and slug, for example getting-started / installation), and \
                 search_documents for title and description matches."
                    .to_string(),
            ),
        }
    }
}
