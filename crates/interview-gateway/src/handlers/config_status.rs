//! Configuration status handlers.
//!
//! - `GET /config-status` - non-sensitive validation summary
//! - `GET /client-config` - the browser-safe configuration view
//!
//! Literal error and warning messages are included only in development;
//! production reports counts.

use crate::client::ClientConfigView;
use crate::models::{
    ConfigStatusResponse, DailyStatus, InterviewLimits, ServiceStatus, ServiceStatuses,
    ValidationSummary,
};
use crate::routes::AppState;
use crate::validation::{self, is_configured};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::instrument;

/// Handler for `GET /config-status`.
#[instrument(skip_all, name = "gateway.config.status")]
pub async fn config_status(State(state): State<Arc<AppState>>) -> Json<ConfigStatusResponse> {
    let config = &state.config;
    let result = validation::validate(config);
    let can_run = validation::can_run(config);

    let (error_messages, warning_messages) = if config.app.mode.is_development() {
        (Some(result.errors.clone()), Some(result.warnings.clone()))
    } else {
        (None, None)
    };

    let status = if result.is_valid { "valid" } else { "invalid" };

    Json(ConfigStatusResponse {
        status: status.to_string(),
        can_run,
        environment: config.app.mode.as_str().to_string(),
        services: ServiceStatuses {
            daily: DailyStatus {
                configured: is_configured(&config.daily.api_key),
                domain: is_configured(&config.daily.domain),
            },
            deepgram: ServiceStatus {
                configured: is_configured(&config.deepgram.api_key),
            },
            anthropic: ServiceStatus {
                configured: is_configured(&config.anthropic.api_key),
            },
            eleven_labs: ServiceStatus {
                configured: is_configured(&config.eleven_labs.api_key),
            },
        },
        interview: InterviewLimits {
            max_duration_seconds: config.interview.max_duration_seconds,
            max_participants: config.interview.max_participants,
            expiry_hours: config.interview.expiry_hours,
        },
        features: config.features.clone(),
        validation: ValidationSummary {
            errors: result.errors.len(),
            warnings: result.warnings.len(),
            error_messages,
            warning_messages,
        },
    })
}

/// Handler for `GET /client-config`.
///
/// The front end fetches this once at mount; the view is recomputed per
/// request but environment state is process-lifetime constant.
#[instrument(skip_all, name = "gateway.config.client")]
pub async fn client_config(State(state): State<Arc<AppState>>) -> Json<ClientConfigView> {
    Json(ClientConfigView::new(&state.config))
}
