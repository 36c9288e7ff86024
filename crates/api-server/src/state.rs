//! Shared application state for REST handlers.

use adscope_alerts::AlertStore;
use adscope_analytics::AnalyticsService;
use adscope_core::config::AppConfig;
use adscope_insights::CompletionClient;
use adscope_platforms::PlatformRegistry;
use adscope_settings::{ApiKeyStore, Plan, SettingsStore};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<CompletionClient>,
    pub analytics: Arc<AnalyticsService>,
    pub platforms: Arc<PlatformRegistry>,
    pub alerts: Arc<AlertStore>,
    pub settings: Arc<SettingsStore>,
    pub api_keys: Arc<ApiKeyStore>,
    /// Demo workspace plan; a user store would supply this per request.
    pub plan: Plan,
    pub node_id: String,
    pub start_time: Instant,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            completion: Arc::new(CompletionClient::new(config.completion.clone())),
            analytics: Arc::new(AnalyticsService::new()),
            platforms: Arc::new(PlatformRegistry::new()),
            alerts: Arc::new(AlertStore::new()),
            settings: Arc::new(SettingsStore::new()),
            api_keys: Arc::new(ApiKeyStore::new()),
            plan: Plan::Basic,
            node_id: config.node_id.clone(),
            start_time: Instant::now(),
        }
    }
}
