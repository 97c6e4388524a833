//! medguard-server
//!
//! The de-identification pipeline and its HTTP surface.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod pipeline;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the service router.
///
/// Request bodies are not size-limited: notes of any length are accepted.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/deidentify", post(routes::deidentify::deidentify))
        .layer(DefaultBodyLimit::disable())
        .layer(axum_mw::from_fn(middleware::access::access_log))
        .layer(cors)
        .with_state(state)
}
