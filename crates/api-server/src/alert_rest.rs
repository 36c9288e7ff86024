//! Alert inbox endpoints.

use crate::envelope::{ApiError, Envelope, MessageData, MessageResponse};
use crate::state::AppState;
use adscope_alerts::{Alert, AlertSettings, AlertSettingsUpdate, CreateAlert};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// GET /api/alerts — inbox, newest first.
pub async fn list(State(state): State<AppState>) -> Json<Envelope<Vec<Alert>>> {
    Envelope::ok(state.alerts.list())
}

/// POST /api/alerts — create an alert. The severity vocabulary is enforced
/// by deserialization; an unknown value is rejected before this handler runs.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAlert>,
) -> (StatusCode, Json<MessageData<Alert>>) {
    let alert = state.alerts.create(request);
    metrics::counter!("api.alerts.created").increment(1);
    (
        StatusCode::CREATED,
        MessageData::ok("Alert created successfully", alert),
    )
}

/// PUT /api/alerts/:alert_id/read — mark one alert read.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ApiError>)> {
    if state.alerts.mark_read(&alert_id) {
        Ok(MessageResponse::ok("Alert marked as read"))
    } else {
        Err(ApiError::not_found("Alert not found"))
    }
}

/// DELETE /api/alerts/:alert_id — remove an alert.
pub async fn delete(
    State(state): State<AppState>,
    Path(alert_id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ApiError>)> {
    if state.alerts.delete(&alert_id) {
        Ok(MessageResponse::ok("Alert deleted successfully"))
    } else {
        Err(ApiError::not_found("Alert not found"))
    }
}

/// GET /api/alerts/settings — threshold settings.
pub async fn get_settings(State(state): State<AppState>) -> Json<Envelope<AlertSettings>> {
    Envelope::ok(state.alerts.settings())
}

/// PUT /api/alerts/settings — partial threshold update.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<AlertSettingsUpdate>,
) -> Json<MessageData<AlertSettings>> {
    let settings = state.alerts.update_settings(update);
    MessageData::ok("Alert settings updated successfully", settings)
}
