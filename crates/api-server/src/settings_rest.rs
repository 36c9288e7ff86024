//! Settings, subscription, billing, and API-key endpoints.

use crate::envelope::{ApiError, Envelope, MessageData, MessageResponse};
use crate::state::AppState;
use adscope_settings::{
    billing_info, subscription_view, ApiKey, BillingInfo, CreateApiKey, SettingsDocument,
    SettingsUpdate, SubscriptionView,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

/// GET /api/settings — the workspace settings document.
pub async fn get_settings(State(state): State<AppState>) -> Json<Envelope<SettingsDocument>> {
    Envelope::ok(state.settings.get())
}

/// PUT /api/settings — sectioned partial update.
pub async fn update_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Json<MessageResponse> {
    state.settings.update(update);
    MessageResponse::ok("Settings updated successfully")
}

/// GET /api/settings/subscription — plan, features, usage, limits.
pub async fn subscription(State(state): State<AppState>) -> Json<Envelope<SubscriptionView>> {
    Envelope::ok(subscription_view(state.plan))
}

/// GET /api/settings/billing — billing summary and invoice history.
pub async fn billing(State(_state): State<AppState>) -> Json<Envelope<BillingInfo>> {
    Envelope::ok(billing_info())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodUpdate {
    #[allow(dead_code)]
    pub payment_method: serde_json::Value,
}

/// PUT /api/settings/billing/payment-method — stub update.
pub async fn update_payment_method(
    State(_state): State<AppState>,
    Json(_update): Json<PaymentMethodUpdate>,
) -> Json<MessageResponse> {
    MessageResponse::ok("Payment method updated successfully")
}

/// POST /api/settings/billing/cancel — stub cancellation.
pub async fn cancel_subscription(State(_state): State<AppState>) -> Json<MessageResponse> {
    MessageResponse::ok(
        "Subscription cancelled successfully. You can continue using the service until the end of your billing period.",
    )
}

/// GET /api/settings/api-keys — the key registry.
pub async fn list_api_keys(State(state): State<AppState>) -> Json<Envelope<Vec<ApiKey>>> {
    Envelope::ok(state.api_keys.list())
}

/// POST /api/settings/api-keys — issue a key.
pub async fn create_api_key(
    State(state): State<AppState>,
    Json(request): Json<CreateApiKey>,
) -> (StatusCode, Json<MessageData<ApiKey>>) {
    let key = state.api_keys.create(request);
    metrics::counter!("api.settings.api_keys_created").increment(1);
    (
        StatusCode::CREATED,
        MessageData::ok("API key created successfully", key),
    )
}

/// DELETE /api/settings/api-keys/:key_id — revoke a key.
pub async fn revoke_api_key(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ApiError>)> {
    if state.api_keys.revoke(&key_id) {
        Ok(MessageResponse::ok("API key revoked successfully"))
    } else {
        Err(ApiError::not_found("API key not found"))
    }
}
