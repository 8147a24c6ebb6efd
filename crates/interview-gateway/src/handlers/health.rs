//! Liveness probe.

use crate::models::HealthResponse;
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

/// Handler for `GET /health`.
///
/// The gateway has no backing stores to ping, so liveness is unconditional.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "environment": "development"
/// }
/// ```
#[instrument(skip_all, name = "gateway.health.check")]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        environment: state.config.app.mode.as_str().to_string(),
    })
}
