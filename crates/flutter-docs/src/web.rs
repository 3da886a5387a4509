//! HTML site and JSON search endpoint.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Home page, categories filtered by `?q=` |
//! | `GET` | `/docs` | Redirects to the first category |
//! | `GET` | `/docs/{category}` | Category page, topics filtered by `?q=` |
//! | `GET` | `/docs/{category}/{slug}` | Document page (ETag aware) |
//! | `GET` | `/search` | Search results page |
//! | `GET` | `/api/search` | Search results as JSON |
//! | `GET` | `/health` | Health check |
//!
//! Unknown categories and documents get a 404 page rather than an error.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::net::TcpListener;
use tracing::{debug, info};

use docs_common::mcp_api::{SearchDocumentsResponse, SearchResult};
use docs_common::render::render;
use docs_common::search::search_documents;
use docs_common::store::DocumentStore;

use crate::error::AppError;
use crate::pages;

#[derive(Clone)]
struct WebState {
    store: Arc<DocumentStore>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    categories: usize,
    documents: usize,
}

pub fn router(store: Arc<DocumentStore>) -> Router {
    Router::new()
        .route("/", get(handle_home))
        .route("/docs", get(handle_docs_index))
        .route("/docs/{category}", get(handle_category))
        .route("/docs/{category}/{slug}", get(handle_document))
        .route("/search", get(handle_search_page))
        .route("/api/search", get(handle_api_search))
        .route("/health", get(handle_health))
        .fallback(handle_fallback)
        .with_state(WebState { store })
}

/// Binds `addr` and serves the site until the process exits.
pub async fn serve(addr: &str, store: Arc<DocumentStore>) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "documentation site ready");
    axum::serve(listener, router(store)).await?;
    Ok(())
}

async fn handle_home(
    State(state): State<WebState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    Html(pages::home_page(&state.store, query.q.trim()).into_string())
}

async fn handle_docs_index(State(state): State<WebState>, uri: Uri) -> Response {
    match state.store.default_category() {
        Some(category) => Redirect::temporary(&pages::category_path(&category.slug)).into_response(),
        None => not_found(&state.store, uri.path()),
    }
}

async fn handle_category(
    State(state): State<WebState>,
    Path(category): Path<String>,
    Query(query): Query<SearchQuery>,
    uri: Uri,
) -> Response {
    let Some(found) = state.store.category(&category) else {
        debug!(category, "unknown category");
        return not_found(&state.store, uri.path());
    };
    Html(pages::category_page(&state.store, found, query.q.trim()).into_string()).into_response()
}

async fn handle_document(
    State(state): State<WebState>,
    Path((category, slug)): Path<(String, String)>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Some(doc) = state.store.document(&category, &slug) else {
        debug!(category, slug, "unknown document");
        return not_found(&state.store, uri.path());
    };

    let blocks = render(&doc.content);
    let body = pages::document_page(&state.store, &category, &slug, doc, &blocks).into_string();
    let etag = etag_for(&body);

    if etag_matches(&headers, &etag) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }
    ([(header::ETAG, etag)], Html(body)).into_response()
}

async fn handle_search_page(
    State(state): State<WebState>,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let q = query.q.trim();
    let results = search_documents(&state.store, q);
    debug!(query = q, results = results.len(), "search page");
    Html(pages::search_page(&state.store, q, &results).into_string())
}

async fn handle_api_search(
    State(state): State<WebState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchDocumentsResponse> {
    let results = search_documents(&state.store, query.q.trim())
        .into_iter()
        .map(SearchResult::from)
        .collect();
    Json(SearchDocumentsResponse { results })
}

async fn handle_health(State(state): State<WebState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        categories: state.store.categories().len(),
        documents: state.store.document_count(),
    })
}

async fn handle_fallback(State(state): State<WebState>, uri: Uri) -> Response {
    not_found(&state.store, uri.path())
}

fn not_found(store: &DocumentStore, path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found_page(store, path).into_string()),
    )
        .into_response()
}

fn etag_for(body: &str) -> String {
    let hash = Sha256::digest(body.as_bytes());
    format!("\"{:x}\"", hash)
}

fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|tag| tag.trim())
        .any(|tag| tag == "*" || tag.strip_prefix("W/").unwrap_or(tag) == etag)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use docs_common::catalog;

    use super::*;

    fn app() -> Router {
        router(Arc::new(catalog::builtin()))
    }

    async fn get(uri: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn home_lists_categories() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Getting Started"));
        assert!(html.contains("Network &amp; Data"));
        assert!(html.contains("Quick Start"));
    }

    #[tokio::test]
    async fn home_filter_narrows_categories() {
        let html = body_text(get("/?q=routes").await).await;
        assert!(html.contains("<a class=\"card\" href=\"/docs/navigation\">"));
        assert!(!html.contains("<a class=\"card\" href=\"/docs/widgets\">"));

        let html = body_text(get("/?q=xyz123").await).await;
        assert!(html.contains("No categories found for"));
    }

    #[tokio::test]
    async fn docs_redirects_to_first_category() {
        let response = get("/docs").await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/docs/getting-started"
        );
    }

    #[tokio::test]
    async fn category_page_lists_topics_and_learning_path() {
        let response = get("/docs/widgets").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Cupertino Widgets"));
        assert!(html.contains("Learning Path"));
        assert!(html.contains("8 min"));
    }

    #[tokio::test]
    async fn unknown_pages_are_not_found() {
        for uri in ["/docs/flutter-web", "/docs/widgets/nope", "/docs/nope/installation", "/elsewhere"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            let html = body_text(response).await;
            assert!(html.contains("Page not found"), "{uri}");
        }
    }

    #[tokio::test]
    async fn document_page_renders_content() {
        let response = get("/docs/getting-started/installation").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        let html = body_text(response).await;
        assert!(html.contains("<h2>System Requirements</h2>"));
        assert!(html.contains("<strong>Operating System</strong>"));
        assert!(html.contains("<code class=\"language-bash\">flutter doctor</code>"));
        assert!(html.contains("href=\"/docs/getting-started/setup-editor\">Setup Editor →</a>"));
    }

    #[tokio::test]
    async fn document_code_is_escaped() {
        let html = body_text(get("/docs/network/json-parsing").await).await;
        assert!(html.contains("Map&lt;String, dynamic&gt;"));
        assert!(!html.contains("Map<String, dynamic>"));
    }

    #[tokio::test]
    async fn matching_etag_returns_not_modified() {
        let first = get("/docs/widgets/basic-widgets").await;
        let etag = first.headers()[header::ETAG].to_str().unwrap().to_string();

        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/docs/widgets/basic-widgets")
                    .header(header::IF_NONE_MATCH, format!("\"other\", {etag}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn api_search_returns_json() {
        let json: serde_json::Value =
            serde_json::from_str(&body_text(get("/api/search?q=sdk").await).await).unwrap();
        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["path"], "/docs/getting-started/installation");

        let json: serde_json::Value =
            serde_json::from_str(&body_text(get("/api/search?q=s").await).await).unwrap();
        assert!(json["results"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_page_reports_misses() {
        let html = body_text(get("/search?q=xyz123").await).await;
        assert!(html.contains("No results found for"));

        let html = body_text(get("/search?q=Provider").await).await;
        assert!(html.contains("href=\"/docs/state/provider\""));
        assert!(html.contains("State · Simple state management for Flutter"));
    }

    #[tokio::test]
    async fn health_reports_counts() {
        let json: serde_json::Value =
            serde_json::from_str(&body_text(get("/health").await).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["categories"], 6);
        assert_eq!(json["documents"], 21);
    }
}
