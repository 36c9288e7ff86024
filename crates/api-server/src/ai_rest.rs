//! AI report endpoints — the HTTP boundary of the report pipeline.
//!
//! Field typing is enforced here, before the pipeline runs; the pipeline
//! itself never rejects. Every branch below the validation gate produces a
//! complete report, so the 500 branch exists only as a contract statement.

use crate::envelope::{FieldError, ValidationErrors};
use crate::state::AppState;
use adscope_core::types::AnalyticsData;
use adscope_insights::{
    aggregate_metrics, assemble_report, build_analysis_prompt, build_optimization_prompt,
    build_platform_prompt, AnalysisReport, FallbackSignals, Insight, Recommendation,
};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    pub platforms: Vec<String>,
    pub timeframe: String,
    pub analytics_data: AnalyticsData,
}

fn validate_report_request(request: &GenerateReportRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if request.platforms.is_empty() {
        errors.push(FieldError {
            field: "platforms",
            message: "must contain at least one platform",
        });
    }
    if request.timeframe.trim().is_empty() {
        errors.push(FieldError {
            field: "timeframe",
            message: "must not be empty",
        });
    }
    if request.analytics_data.is_empty() {
        errors.push(FieldError {
            field: "analyticsData",
            message: "must contain metrics for at least one platform",
        });
    }
    errors
}

/// POST /api/ai/generate-report — run the full report pipeline.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<AnalysisReport>, (StatusCode, Json<ValidationErrors>)> {
    let errors = validate_report_request(&request);
    if !errors.is_empty() {
        metrics::counter!("api.ai.validation_errors").increment(1);
        return Err(ValidationErrors::bad_request(errors));
    }

    info!(
        platforms = request.platforms.len(),
        timeframe = %request.timeframe,
        "Generating AI report"
    );

    let aggregated = aggregate_metrics(&request.analytics_data);
    let prompt = build_analysis_prompt(
        &request.platforms,
        &request.timeframe,
        &request.analytics_data,
        &aggregated,
    );
    let signals = FallbackSignals::from_aggregates(&aggregated);

    let body = state.completion.generate(&prompt, signals).await;
    let report = assemble_report(body, aggregated, request.platforms, request.timeframe);

    info!(source = ?report.source, id = report.id, "AI report generated");
    metrics::counter!("api.ai.reports_generated").increment(1);

    Ok(Json(report))
}

// ─── Platform insights ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PlatformInsightsRequest {
    pub platform: String,
    pub data: serde_json::Value,
}

#[derive(Serialize)]
pub struct PlatformInsightsResponse {
    pub insights: Vec<Insight>,
}

/// POST /api/ai/platform-insights — insights for a single platform's data.
pub async fn platform_insights(
    State(state): State<AppState>,
    Json(request): Json<PlatformInsightsRequest>,
) -> Json<PlatformInsightsResponse> {
    let prompt = build_platform_prompt(&request.platform, &request.data);
    // Platform prompts carry no aggregate block; the fallback runs on its
    // documented default signals.
    let signals = FallbackSignals::from_prompt(&prompt);
    let body = state.completion.generate(&prompt, signals).await;

    metrics::counter!("api.ai.platform_insights").increment(1);
    Json(PlatformInsightsResponse {
        insights: body.insights,
    })
}

// ─── Optimization recommendations ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationRequest {
    pub analytics_data: serde_json::Value,
    pub goals: serde_json::Value,
}

#[derive(Serialize)]
pub struct OptimizationResponse {
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/ai/optimization-recommendations — recommendations for stated goals.
pub async fn optimization_recommendations(
    State(state): State<AppState>,
    Json(request): Json<OptimizationRequest>,
) -> Json<OptimizationResponse> {
    let prompt = build_optimization_prompt(&request.analytics_data, &request.goals);
    let signals = FallbackSignals::from_prompt(&prompt);
    let body = state.completion.generate(&prompt, signals).await;

    metrics::counter!("api.ai.optimization_recommendations").increment(1);
    Json(OptimizationResponse {
        recommendations: body.recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_flags_all_empty_fields() {
        let request = GenerateReportRequest {
            platforms: vec![],
            timeframe: "  ".into(),
            analytics_data: AnalyticsData::new(),
        };
        let errors = validate_report_request(&request);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "platforms");
        assert_eq!(errors[2].field, "analyticsData");
    }

    #[test]
    fn test_request_accepts_wire_format() {
        let json = r#"{
            "platforms": ["facebook"],
            "timeframe": "last_30_days",
            "analyticsData": {
                "facebook": {
                    "spend": 12500, "impressions": 600000, "clicks": 7200,
                    "conversions": 290, "ctr": 1.2, "cpc": 1.74, "cpm": 20.83,
                    "conversion_rate": 4.03
                }
            }
        }"#;
        let request: GenerateReportRequest = serde_json::from_str(json).unwrap();
        assert!(validate_report_request(&request).is_empty());
        assert_eq!(request.analytics_data["facebook"].clicks, 7200);
    }
}
