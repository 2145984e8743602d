use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::services;
use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Mount the service record routes.
///
/// `/services/stats` and `/services/seed` are registered alongside the
/// `/services/{id}` capture; static segments take priority in axum's
/// matching, so `stats` and `seed` are never treated as record ids.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/services",
            get(services::list_services)
                .post(services::create_service)
                .fallback(method_not_allowed),
        )
        .route(
            "/services/stats",
            get(services::service_stats).fallback(method_not_allowed),
        )
        .route(
            "/services/seed",
            post(services::seed_services).fallback(method_not_allowed),
        )
        .route(
            "/services/{id}",
            put(services::update_service)
                .delete(services::delete_service)
                .fallback(method_not_allowed),
        )
}
