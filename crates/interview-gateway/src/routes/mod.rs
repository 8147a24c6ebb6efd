//! HTTP routes for the interview gateway.
//!
//! Defines the Axum router and application state.

use crate::config::Config;
use crate::handlers;
use crate::services::DailyClient;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

/// Application state shared across all handlers.
///
/// The configuration is write-once at construction and read-only afterwards;
/// concurrent readers need no locking.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Config,

    /// Daily.co provisioning client.
    pub daily: DailyClient,
}

/// Build the application routes.
///
/// Creates an Axum router with:
/// - `/health` - Liveness probe
/// - `/create-room` - Room provisioning (POST) and probe (GET)
/// - `/config-status` - Validation summary
/// - `/client-config` - Browser-safe configuration view
/// - TraceLayer for request logging
/// - 30 second request timeout
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/create-room",
            get(handlers::room_service_status).post(handlers::create_room),
        )
        .route("/config-status", get(handlers::config_status))
        .route("/client-config", get(handlers::client_config))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
