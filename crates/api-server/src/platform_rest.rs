//! Platform-connection endpoints.

use crate::envelope::{ApiError, Envelope, FieldError, MessageData, MessageResponse, ValidationErrors};
use crate::state::AppState;
use adscope_platforms::{available_platforms, AvailablePlatform, ConnectedPlatform, SyncResult};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

/// GET /api/platforms/connected — linked accounts, newest first.
pub async fn connected(State(state): State<AppState>) -> Json<Envelope<Vec<ConnectedPlatform>>> {
    Envelope::ok(state.platforms.list_connected())
}

/// GET /api/platforms/available — linkable-platform catalog.
pub async fn available() -> Json<Envelope<Vec<AvailablePlatform>>> {
    Envelope::ok(available_platforms())
}

#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    pub platform: String,
    pub credentials: serde_json::Value,
}

/// POST /api/platforms/connect — link an account.
pub async fn connect(
    State(state): State<AppState>,
    Json(request): Json<ConnectRequest>,
) -> Result<Json<MessageData<ConnectedPlatform>>, (StatusCode, Json<ValidationErrors>)> {
    let mut errors = Vec::new();
    if request.platform.trim().is_empty() {
        errors.push(FieldError {
            field: "platform",
            message: "must not be empty",
        });
    }
    if !request.credentials.is_object() {
        errors.push(FieldError {
            field: "credentials",
            message: "must be an object",
        });
    }
    if !errors.is_empty() {
        return Err(ValidationErrors::bad_request(errors));
    }

    let connection = state.platforms.connect(&request.platform, &request.credentials);
    metrics::counter!("api.platforms.connected").increment(1);
    Ok(MessageData::ok(
        format!("{} connected successfully", request.platform),
        connection,
    ))
}

/// DELETE /api/platforms/disconnect/:platform_id — unlink an account.
pub async fn disconnect(
    State(state): State<AppState>,
    Path(platform_id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ApiError>)> {
    if state.platforms.disconnect(&platform_id) {
        metrics::counter!("api.platforms.disconnected").increment(1);
        Ok(MessageResponse::ok("Platform disconnected successfully"))
    } else {
        Err(ApiError::not_found("Platform connection not found"))
    }
}

/// POST /api/platforms/sync/:platform_id — refresh a connection.
pub async fn sync(
    State(state): State<AppState>,
    Path(platform_id): Path<String>,
) -> Result<Json<MessageData<SyncResult>>, (StatusCode, Json<ApiError>)> {
    state
        .platforms
        .sync(&platform_id)
        .map(|result| MessageData::ok("Platform data synced successfully", result))
        .ok_or_else(|| ApiError::not_found("Platform connection not found"))
}
