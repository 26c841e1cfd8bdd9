//! Shared helpers for API integration tests.
//!
//! Tests drive the real router (full middleware stack) via
//! `tower::ServiceExt::oneshot` against a `#[sqlx::test]` database, with
//! an in-memory file fetcher standing in for the network.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use handover_api::config::ServerConfig;
use handover_api::fetch::{FetchError, FileFetcher};
use handover_api::router::build_app_router;
use handover_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        file_fetch_timeout_secs: 5,
    }
}

/// In-memory [`FileFetcher`]: serves bytes for known URLs and answers
/// HTTP 404 for everything else, like a dead file host would.
pub struct MockFileFetcher {
    files: HashMap<String, Vec<u8>>,
}

impl MockFileFetcher {
    pub fn new(files: impl IntoIterator<Item = (&'static str, &'static [u8])>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(url, bytes)| (url.to_string(), bytes.to_vec()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            files: HashMap::new(),
        }
    }
}

#[async_trait::async_trait]
impl FileFetcher for MockFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.files
            .get(url)
            .cloned()
            .ok_or(FetchError::HttpStatus(404))
    }
}

/// Build the application router with the given pool and file fetcher.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses.
pub fn build_test_app_with_fetcher(pool: PgPool, fetcher: Arc<dyn FileFetcher>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        fetcher,
    };
    build_app_router(state, &config)
}

/// Build the application router with no fetchable files (intake and
/// project tests never touch the network).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_fetcher(pool, Arc::new(MockFileFetcher::empty()))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    app.oneshot(request).await.expect("request succeeds")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");
    app.oneshot(request).await.expect("request succeeds")
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    app.oneshot(request).await.expect("request succeeds")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body is valid JSON")
}
