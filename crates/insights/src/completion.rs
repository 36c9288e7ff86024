//! Completion-provider client. One attempt per invocation; every failure
//! branch lands in the deterministic fallback, so callers always get a
//! complete analysis body.

use crate::fallback::{generate_structured_analysis, FallbackSignals};
use crate::rate_limit::CompletionRateLimiter;
use crate::report::AnalysisBody;
use adscope_core::config::CompletionConfig;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// System message sent alongside every rendered prompt.
pub const SYSTEM_PROMPT: &str = "You are an expert digital advertising analyst. Provide professional insights and recommendations in JSON format.";

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the external text-completion API with local throttling and a
/// deterministic fallback path.
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
    limiter: Arc<CompletionRateLimiter>,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        let limiter = Arc::new(CompletionRateLimiter::new(
            config.min_interval_ms,
            config.max_calls_per_minute,
        ));
        Self::with_limiter(config, limiter)
    }

    pub fn with_limiter(config: CompletionConfig, limiter: Arc<CompletionRateLimiter>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            config,
            limiter,
        }
    }

    /// Generate an analysis for the rendered prompt. Never fails: whichever
    /// branch is taken (credential absent, throttled, provider error,
    /// unparsable body, success) the result is a full analysis body.
    pub async fn generate(&self, prompt: &str, signals: FallbackSignals) -> AnalysisBody {
        let Some(api_key) = self.config.api_key.clone() else {
            info!("No completion credential configured, using fallback generator");
            self.pace(self.config.mock_delay_ms).await;
            return self.fallback(signals, "credential_absent");
        };

        if let Err(e) = self.limiter.attempt() {
            warn!(error = %e, "Local rate limit hit, using fallback generator");
            return self.fallback(signals, "rate_limited_local");
        }

        info!(model = %self.config.model, "Calling completion provider");

        let request = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt },
            ],
            "temperature": 0.7,
            "max_tokens": 2000,
        });

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS => {
                warn!("Completion provider rejected the call (429), using fallback generator");
                self.pace(self.config.rate_limited_delay_ms).await;
                self.fallback(signals, "rate_limited_provider")
            }
            Ok(resp) if !resp.status().is_success() => {
                warn!(status = %resp.status(), "Completion provider returned an error status");
                self.pace(self.config.failure_delay_ms).await;
                self.fallback(signals, "http_error")
            }
            Ok(resp) => match resp.json::<ChatCompletionResponse>().await {
                Ok(completion) => self.parse_completion(completion, signals),
                Err(e) => {
                    warn!(error = %e, "Completion response body was not valid JSON");
                    self.fallback(signals, "malformed_response")
                }
            },
            Err(e) => {
                warn!(error = %e, "Completion provider call failed");
                self.pace(self.config.failure_delay_ms).await;
                self.fallback(signals, "network_failure")
            }
        }
    }

    /// Pull the analysis JSON out of the provider's first choice; an
    /// unparsable message routes to the fallback.
    fn parse_completion(
        &self,
        completion: ChatCompletionResponse,
        signals: FallbackSignals,
    ) -> AnalysisBody {
        let Some(content) = completion.choices.first().map(|c| c.message.content.as_str()) else {
            warn!("Completion response carried no choices");
            return self.fallback(signals, "malformed_response");
        };

        match serde_json::from_str::<AnalysisBody>(content) {
            Ok(body) => {
                info!("Completion provider analysis received");
                metrics::counter!("insights.completion.provider_responses").increment(1);
                body
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse provider analysis, using fallback generator");
                self.fallback(signals, "malformed_response")
            }
        }
    }

    fn fallback(&self, signals: FallbackSignals, reason: &'static str) -> AnalysisBody {
        metrics::counter!("insights.completion.fallbacks", "reason" => reason).increment(1);
        generate_structured_analysis(signals)
    }

    async fn pace(&self, delay_ms: u64) {
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }
}
