use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADSCOPE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub completion: CompletionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Settings for the external text-completion provider.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Bearer credential. None means every report is served by the
    /// deterministic fallback generator.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_completion_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Minimum spacing between outbound provider calls.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    /// Rolling per-minute call cap (the provider's assumed ceiling).
    #[serde(default = "default_max_calls_per_minute")]
    pub max_calls_per_minute: u32,
    /// Simulated-latency delay on the credential-absent path.
    #[serde(default = "default_mock_delay_ms")]
    pub mock_delay_ms: u64,
    /// Pacing delay before falling back after a provider failure.
    #[serde(default = "default_failure_delay_ms")]
    pub failure_delay_ms: u64,
    /// Longer pacing delay before falling back after a provider 429.
    #[serde(default = "default_rate_limited_delay_ms")]
    pub rate_limited_delay_ms: u64,
}

// Default functions
fn default_node_id() -> String {
    "adscope-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    5000
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_completion_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}
fn default_request_timeout_secs() -> u64 {
    30
}
fn default_min_interval_ms() -> u64 {
    2000
}
fn default_max_calls_per_minute() -> u32 {
    20
}
fn default_mock_delay_ms() -> u64 {
    2000
}
fn default_failure_delay_ms() -> u64 {
    1000
}
fn default_rate_limited_delay_ms() -> u64 {
    3000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_completion_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
            min_interval_ms: default_min_interval_ms(),
            max_calls_per_minute: default_max_calls_per_minute(),
            mock_delay_ms: default_mock_delay_ms(),
            failure_delay_ms: default_failure_delay_ms(),
            rate_limited_delay_ms: default_rate_limited_delay_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            completion: CompletionConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADSCOPE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

impl CompletionConfig {
    /// Test/offline profile: no credential, no pacing delays.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            mock_delay_ms: 0,
            failure_delay_ms: 0,
            rate_limited_delay_ms: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api.http_port, 5000);
        assert_eq!(cfg.completion.max_calls_per_minute, 20);
        assert_eq!(cfg.completion.min_interval_ms, 2000);
        assert!(cfg.completion.api_key.is_none());
    }

    #[test]
    fn test_offline_profile_zeroes_delays() {
        let cfg = CompletionConfig::offline();
        assert_eq!(cfg.mock_delay_ms, 0);
        assert_eq!(cfg.failure_delay_ms, 0);
        assert_eq!(cfg.rate_limited_delay_ms, 0);
    }
}
