use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use genops_api::config::ServerConfig;
use genops_api::router::build_app_router;
use genops_api::state::AppState;
use genops_store::{MemoryStore, RecordStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
    }
}

/// Build the full application router backed by a fresh in-memory store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The store handle is returned so
/// tests can subscribe to change events or inspect state directly.
pub fn build_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let app = build_test_app_with_store(Arc::clone(&store) as Arc<dyn RecordStore>);
    (app, store)
}

/// Build the application router over an arbitrary store implementation.
pub fn build_test_app_with_store(store: Arc<dyn RecordStore>) -> Router {
    let state = AppState { store };
    build_app_router(state, &test_config())
}

/// Drive one request through the router and return status + parsed body.
///
/// An empty response body parses as `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    dispatch(app, request).await
}

/// Like [`send`], but with a raw string body. Lets tests submit payloads
/// that are not valid JSON.
#[allow(dead_code)]
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");

    dispatch(app, request).await
}

async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should produce a response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, json)
}

/// A complete, valid create payload. Tests tweak fields as needed.
pub fn valid_create_payload() -> Value {
    json!({
        "name": "Annual Generator Maintenance",
        "type": "maintenance",
        "provider": "PowerTech Services",
        "cost": 2500,
        "scheduledDate": "2024-03-01",
        "generatorId": "GEN001",
        "description": "Complete annual maintenance"
    })
}

/// Create a service through the API, asserting 201, and return its record.
pub async fn create_service(app: &Router, payload: Value) -> Value {
    let (status, body) = send(app, Method::POST, "/services", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    assert_eq!(body["success"], true);
    body["data"].clone()
}
