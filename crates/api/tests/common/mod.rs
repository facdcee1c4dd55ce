#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use irblast_store::{LibraryService, MemoryBackend, TieredStore};
use irblast_transport::{Dispatcher, MockTransport, TransportConfig};
use tokio::sync::RwLock;
use tower::ServiceExt;

use irblast_api::config::ServerConfig;
use irblast_api::router::build_app_router;
use irblast_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The library paths are never touched:
/// tests persist through an in-memory backend.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        library_path: "unused-ir-library.json".into(),
        library_fallback_path: "unused-ir-library.fallback.json".into(),
        transport: TransportConfig::Mock,
    }
}

/// The assembled application plus handles the tests observe through.
pub struct TestApp {
    pub router: Router,
    /// The active transport, kept concrete so tests can count transmissions.
    pub mock: Arc<MockTransport>,
    pub library: Arc<LibraryService>,
}

/// Build the full application router with all middleware layers, backed by
/// an in-memory library (seeded on open) and a zero-latency mock transport.
///
/// This mirrors the construction in `main.rs` so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery) that production uses.
pub async fn build_test_app() -> TestApp {
    let config = test_config();

    let store = TieredStore::single(MemoryBackend::new());
    let library = Arc::new(LibraryService::open(store).await);

    let mock = Arc::new(MockTransport::with_latency(Duration::ZERO));
    let dispatcher = Arc::new(Dispatcher::with_transport(mock.clone()));

    let state = AppState {
        library: Arc::clone(&library),
        dispatcher,
        transport_config: Arc::new(RwLock::new(TransportConfig::Mock)),
        http_client: reqwest::Client::new(),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        mock,
        library,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
