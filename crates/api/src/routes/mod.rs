pub mod health;
pub mod services;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /services            GET list, POST create
/// /services/stats      GET aggregate statistics
/// /services/seed       POST replace collection with seed fixtures
/// /services/{id}       PUT partial update, DELETE remove
/// ```
pub fn api_routes() -> Router<AppState> {
    services::router()
}

/// Fallback for paths that exist but do not support the request method.
///
/// Wired as the per-route `MethodRouter` fallback so clients get the error
/// envelope instead of an empty 405.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Router-level fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Not found",
            "code": "NOT_FOUND",
        })),
    )
}
