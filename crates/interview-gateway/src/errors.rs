//! Provisioning error types.
//!
//! All errors map to HTTP responses with a flat `{"error": ..., "details": ...}`
//! JSON body via the `IntoResponse` impl. Messages returned to clients are
//! generic; raw provider payloads are logged server-side only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// Failure modes of room provisioning.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The Daily.co credential is absent; no network call was attempted.
    #[error("Daily.co API key not configured")]
    NotConfigured,

    /// Daily.co answered with a non-success status.
    #[error("Daily.co rejected the room request: {status}")]
    ProviderRejected { status: u16, message: String },

    /// Transport failure, or a success body that could not be understood.
    #[error("Daily.co is unavailable: {0}")]
    Unavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for ProvisionError {
    fn into_response(self) -> Response {
        let (error, details) = match &self {
            ProvisionError::NotConfigured => {
                warn!(
                    target: "gateway.errors",
                    "Room creation attempted without a Daily.co API key"
                );
                ("Daily.co API key not configured".to_string(), None)
            }
            ProvisionError::ProviderRejected { status, message } => {
                error!(
                    target: "gateway.errors",
                    status = *status,
                    message = %message,
                    "Daily.co rejected the room request"
                );
                (
                    "Failed to create interview room".to_string(),
                    Some(message.clone()),
                )
            }
            ProvisionError::Unavailable(reason) => {
                // The transport error is logged here; the client only learns
                // that the video service could not be reached.
                error!(target: "gateway.errors", reason = %reason, "Daily.co request failed");
                (
                    "Failed to create interview room".to_string(),
                    Some("Video service is unavailable".to_string()),
                )
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error, details }),
        )
            .into_response()
    }
}
