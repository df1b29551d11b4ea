//! Application setup and router configuration.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    approve_handler, health_handler, list_handler, reject_handler, submit_handler,
};

/// Build the axum application router.
///
/// All moderation operations hang off `/api/moderation`; handlers share
/// the [`ServerDeps`] container as axum state.
pub fn build_app(deps: ServerDeps) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/moderation/items",
            post(submit_handler).get(list_handler),
        )
        .route("/api/moderation/items/:id/approve", post(approve_handler))
        .route("/api/moderation/items/:id/reject", post(reject_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(deps)
}
