//! Data models for the interview gateway API.
//!
//! All local API bodies are camelCase on the wire; the Daily.co wire format
//! (snake_case) lives with the client in `services::daily`.

use crate::config::FeatureFlags;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A provisioned interview room, normalized from the Daily.co response.
///
/// Never mutated after creation. Consumers treat the session as expired once
/// the current time passes `expires_at`; the provider enforces the actual
/// termination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSession {
    /// Provider-assigned room identifier.
    pub id: String,

    /// Provider room name (equals the session id it was created under).
    pub name: String,

    /// Join URL for the room.
    pub url: String,

    /// Correlation token, `interview-<epoch_ms>[-<suffix>]`.
    pub session_id: String,

    /// Absolute expiry: creation time plus the configured expiry hours.
    pub expires_at: DateTime<Utc>,

    /// Interview limits baked into the provider request, echoed for display.
    pub limits: RoomLimits,
}

/// The limits subset carried on a [`RoomSession`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomLimits {
    pub max_participants: i64,
    pub duration_seconds: i64,
    pub enable_recording: bool,
}

/// Body of `POST /create-room`. The body may be omitted entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub session_id: Option<String>,
}

/// Success body of `POST /create-room`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub success: bool,
    pub room: RoomSession,
}

/// Body of `GET /create-room`, the room-service probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomServiceStatus {
    pub service: String,
    pub status: String,
    pub configured: bool,
    pub domain: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
}

/// Body of `GET /config-status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigStatusResponse {
    /// `"valid"` or `"invalid"`.
    pub status: String,
    pub can_run: bool,
    pub environment: String,
    pub services: ServiceStatuses,
    pub interview: InterviewLimits,
    pub features: FeatureFlags,
    pub validation: ValidationSummary,
}

/// Per-service `configured` flags. Never carries credential values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatuses {
    pub daily: DailyStatus,
    pub deepgram: ServiceStatus,
    pub anthropic: ServiceStatus,
    pub eleven_labs: ServiceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub configured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyStatus {
    pub configured: bool,
    pub domain: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewLimits {
    pub max_duration_seconds: i64,
    pub max_participants: i64,
    pub expiry_hours: i64,
}

/// Validation counts, with literal messages only in development.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub errors: usize,
    pub warnings: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_messages: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_messages: Option<Vec<String>>,
}
