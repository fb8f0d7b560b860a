//! redactia-api
//!
//! HTTP surface for the Redactia analyzer: routing, error mapping, and
//! process configuration. All business logic lives below this crate.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::state::AppState;

/// Build the application router. All routes live under the `/api` prefix.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/", get(routes::root::root))
        .route("/api/status", post(routes::status::create_status_check))
        .route("/api/status", get(routes::status::list_status_checks))
        .route("/api/analyze", post(routes::analyze::analyze_text))
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .with_state(state)
}

/// CORS layer for the configured origins. A `*` anywhere in the list opens
/// every origin; unparseable entries are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return layer.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => allowed.push(value),
            Err(_) => tracing::warn!(origin = %origin, "skipping unparseable CORS origin"),
        }
    }

    layer.allow_origin(AllowOrigin::list(allowed))
}
