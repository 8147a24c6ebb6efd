//! Daily.co room provisioning client.
//!
//! Wraps the Daily.co REST API for creating interview rooms. Exactly one
//! outbound call per invocation, no retry: a caller that gives up on a slow
//! request can only drop the pending future, the network call itself is not
//! cancelled. Concurrent invocations are independent.

use crate::config::Config;
use crate::errors::ProvisionError;
use crate::models::{RoomLimits, RoomSession};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Request timeout for Daily.co calls in seconds.
const DAILY_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connect timeout for Daily.co calls in seconds.
const DAILY_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Length of the random session id suffix in hex characters.
const SESSION_SUFFIX_LEN: usize = 12;

/// Room creation request body (Daily.co wire format).
#[derive(Debug, Serialize)]
struct CreateRoomBody<'a> {
    name: &'a str,
    privacy: &'static str,
    properties: RoomProperties,
}

/// Daily.co room properties for interview sessions.
///
/// Screen share and chat stay off to keep the session focused on the
/// conversation; pre-join and network-quality UI stay on so candidates can
/// check their setup.
#[derive(Debug, Serialize)]
struct RoomProperties {
    max_participants: i64,
    enable_chat: bool,
    enable_screenshare: bool,
    start_video_off: bool,
    start_audio_off: bool,
    enable_recording: bool,
    /// Absolute room expiry in seconds since epoch.
    exp: i64,
    eject_at_room_exp: bool,
    enable_prejoin_ui: bool,
    enable_network_ui: bool,
    enable_people_ui: bool,
}

/// The subset of the Daily.co room descriptor the gateway consumes.
#[derive(Debug, Deserialize)]
struct DailyRoom {
    id: String,
    name: String,
    url: String,
    created_at: DateTime<Utc>,
}

/// Daily.co error body, e.g. `{"error":"invalid-request-error","info":"..."}`.
#[derive(Debug, Default, Deserialize)]
struct DailyErrorBody {
    error: Option<String>,
    info: Option<String>,
}

/// Generate a correlation token for an interview session.
///
/// Format: `interview-<epoch_ms>-<suffix>`. The random suffix keeps ids
/// unique even when many sessions start within the same millisecond.
pub fn generate_session_id() -> String {
    let now_ms = Utc::now().timestamp_millis();
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = uuid.get(..SESSION_SUFFIX_LEN).unwrap_or(&uuid);
    format!("interview-{}-{}", now_ms, suffix)
}

/// HTTP client for the Daily.co rooms API.
///
/// Built once at startup and shared; holds no per-request state.
#[derive(Debug, Clone)]
pub struct DailyClient {
    client: Client,
    base_url: String,
}

impl DailyClient {
    /// Create a new Daily.co client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProvisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DAILY_REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DAILY_CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                error!(target: "gateway.services.daily", error = %e, "Failed to build HTTP client");
                ProvisionError::Unavailable("failed to build HTTP client".to_string())
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a Daily.co room for an interview session.
    ///
    /// The caller-supplied session id becomes the room name; when absent one
    /// is synthesized. Two calls with the same session id create two
    /// independent provider rooms; the provider's own uniqueness rules apply
    /// out of band.
    ///
    /// # Errors
    ///
    /// - `ProvisionError::NotConfigured` if the Daily.co API key is absent
    ///   (checked before any network activity)
    /// - `ProvisionError::ProviderRejected` on a non-success provider status
    /// - `ProvisionError::Unavailable` on transport failure or an
    ///   uninterpretable success body
    #[instrument(skip(self, config), fields(session_id = tracing::field::Empty))]
    pub async fn create_room(
        &self,
        config: &Config,
        session_id: Option<String>,
    ) -> Result<RoomSession, ProvisionError> {
        let session_id = session_id.unwrap_or_else(generate_session_id);
        tracing::Span::current().record("session_id", session_id.as_str());

        // Fail fast before touching the network.
        if config.daily.api_key.is_empty() {
            return Err(ProvisionError::NotConfigured);
        }

        let expires_at = Utc::now() + chrono::Duration::hours(config.interview.expiry_hours);

        let body = CreateRoomBody {
            name: &session_id,
            privacy: "public",
            properties: RoomProperties {
                max_participants: config.interview.max_participants,
                enable_chat: false,
                enable_screenshare: false,
                start_video_off: false,
                start_audio_off: false,
                enable_recording: config.features.enable_recording,
                exp: expires_at.timestamp(),
                eject_at_room_exp: true,
                enable_prejoin_ui: true,
                enable_network_ui: true,
                enable_people_ui: true,
            },
        };

        let url = format!("{}/rooms", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", config.daily.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(target: "gateway.services.daily", error = %e, "Daily.co request failed");
                ProvisionError::Unavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail: DailyErrorBody = response.json().await.unwrap_or_default();
            warn!(
                target: "gateway.services.daily",
                status = status.as_u16(),
                error = detail.error.as_deref().unwrap_or("unknown"),
                info = detail.info.as_deref().unwrap_or(""),
                "Daily.co rejected the room request"
            );
            return Err(ProvisionError::ProviderRejected {
                status: status.as_u16(),
                message: detail.error.unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        let room: DailyRoom = response.json().await.map_err(|e| {
            error!(target: "gateway.services.daily", error = %e, "Failed to parse Daily.co response");
            ProvisionError::Unavailable("malformed provider response".to_string())
        })?;

        info!(
            target: "gateway.services.daily",
            room_id = %room.id,
            room_name = %room.name,
            created_at = %room.created_at,
            expires_at = %expires_at,
            "Daily.co room created"
        );

        Ok(RoomSession {
            id: room.id,
            name: room.name,
            url: room.url,
            session_id,
            expires_at,
            limits: RoomLimits {
                max_participants: config.interview.max_participants,
                duration_seconds: config.interview.max_duration_seconds,
                enable_recording: config.features.enable_recording,
            },
        })
    }
}
