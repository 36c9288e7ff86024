//! API server — router assembly and HTTP/metrics startup.

use crate::state::AppState;
use crate::{ai_rest, alert_rest, analytics_rest, platform_rest, settings_rest};
use adscope_core::config::AppConfig;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Main API server for the dashboard backend.
pub struct ApiServer {
    config: AppConfig,
    state: AppState,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub node_id: String,
    pub uptime_secs: u64,
}

impl ApiServer {
    pub fn new(config: AppConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Build the application router with every endpoint mounted.
    pub fn router(state: AppState) -> Router {
        Router::new()
            // AI report pipeline
            .route("/api/ai/generate-report", post(ai_rest::generate_report))
            .route("/api/ai/platform-insights", post(ai_rest::platform_insights))
            .route(
                "/api/ai/optimization-recommendations",
                post(ai_rest::optimization_recommendations),
            )
            // Analytics
            .route("/api/analytics/unified", get(analytics_rest::unified))
            .route(
                "/api/analytics/platform/:platform",
                get(analytics_rest::platform),
            )
            .route("/api/analytics/campaigns", get(analytics_rest::campaigns))
            .route("/api/analytics/performance", get(analytics_rest::performance))
            .route("/api/analytics/insights", get(analytics_rest::insights))
            .route("/api/analytics/realtime", get(analytics_rest::realtime))
            // Platform connections
            .route("/api/platforms/connected", get(platform_rest::connected))
            .route("/api/platforms/available", get(platform_rest::available))
            .route("/api/platforms/connect", post(platform_rest::connect))
            .route(
                "/api/platforms/disconnect/:platform_id",
                delete(platform_rest::disconnect),
            )
            .route("/api/platforms/sync/:platform_id", post(platform_rest::sync))
            // Alerts
            .route("/api/alerts", get(alert_rest::list).post(alert_rest::create))
            .route(
                "/api/alerts/settings",
                get(alert_rest::get_settings).put(alert_rest::update_settings),
            )
            .route("/api/alerts/:alert_id/read", put(alert_rest::mark_read))
            .route("/api/alerts/:alert_id", delete(alert_rest::delete))
            // Settings
            .route(
                "/api/settings",
                get(settings_rest::get_settings).put(settings_rest::update_settings),
            )
            .route("/api/settings/subscription", get(settings_rest::subscription))
            .route("/api/settings/billing", get(settings_rest::billing))
            .route(
                "/api/settings/billing/payment-method",
                put(settings_rest::update_payment_method),
            )
            .route(
                "/api/settings/billing/cancel",
                post(settings_rest::cancel_subscription),
            )
            .route(
                "/api/settings/api-keys",
                get(settings_rest::list_api_keys).post(settings_rest::create_api_key),
            )
            .route(
                "/api/settings/api-keys/:key_id",
                delete(settings_rest::revoke_api_key),
            )
            // Operational
            .route("/api/health", get(health_check))
            .fallback(not_found)
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Start the HTTP server (blocks until shutdown).
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = Self::router(self.state.clone());

        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the metrics exporter on its own port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}

/// GET /api/health — liveness for the dashboard and probes.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "AdScope API is running".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
