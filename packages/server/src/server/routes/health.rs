use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::domains::moderation::actions::pending_count;
use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    /// Depth of the review queue, the number operators actually watch.
    pending_items: usize,
}

/// Health check endpoint.
///
/// Returns 200 OK with the current review-queue depth, or 503 if the
/// item store cannot be read.
pub async fn health_handler(
    State(deps): State<ServerDeps>,
) -> (StatusCode, Json<HealthResponse>) {
    match pending_count(&deps).await {
        Ok(pending_items) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
                pending_items,
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "error".to_string(),
                pending_items: 0,
            }),
        ),
    }
}
