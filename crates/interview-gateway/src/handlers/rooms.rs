//! Room provisioning handlers.
//!
//! - `POST /create-room` - create a Daily.co room for an interview session
//! - `GET /create-room` - probe whether room creation is configured
//!
//! # Security
//!
//! Rooms are public; access control is out of scope for the gateway. Error
//! messages returned to clients are generic and the Daily.co credential
//! never appears in a response.

use crate::errors::ProvisionError;
use crate::models::{CreateRoomRequest, CreateRoomResponse, RoomServiceStatus};
use crate::routes::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{info, instrument};

/// Handler for `POST /create-room`.
///
/// Accepts an optional caller-supplied session id. A missing or malformed
/// body is treated the same as an empty one: a session id is synthesized.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "room": { ... } }`
/// - 500 Internal Server Error: credential missing, provider rejection, or
///   provider unreachable (`{ "error": ..., "details"? }`)
#[instrument(skip_all, name = "gateway.rooms.create")]
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateRoomRequest>>,
) -> Result<Json<CreateRoomResponse>, ProvisionError> {
    let session_id = body.and_then(|Json(request)| request.session_id);

    let room = state.daily.create_room(&state.config, session_id).await?;

    info!(
        target: "gateway.handlers.rooms",
        session_id = %room.session_id,
        room_url = %room.url,
        expires_at = %room.expires_at,
        "Interview room created"
    );

    Ok(Json(CreateRoomResponse {
        success: true,
        room,
    }))
}

/// Handler for `GET /create-room`.
///
/// Reports whether the Daily.co credential is present without revealing it.
#[instrument(skip_all, name = "gateway.rooms.status")]
pub async fn room_service_status(State(state): State<Arc<AppState>>) -> Json<RoomServiceStatus> {
    Json(RoomServiceStatus {
        service: "Daily.co Room Creation".to_string(),
        status: "available".to_string(),
        configured: !state.config.daily.api_key.is_empty(),
        domain: state.config.daily.domain.clone(),
    })
}
