//! Report envelope types and assembly.
//!
//! The analysis body is the JSON contract shared with the completion
//! provider: whatever the provider (or the fallback generator) produces is
//! merged into the assembler's envelope. The body's fields win on name
//! collisions; `summary` is the exception and always comes from the
//! aggregator.

use crate::aggregate::AggregatedMetrics;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ─── Vocabulary ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Performance,
    Cost,
    Reach,
    Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Warning,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    BudgetOptimization,
    CreativeOptimization,
    AudienceExpansion,
    BiddingStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
}

/// Where the analysis body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Openai,
    Mock,
}

// ─── Analysis body ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub expected_impact: String,
    pub implementation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub metric: String,
    pub trend: TrendDirection,
    pub change: String,
    pub period: String,
    pub insight: String,
}

/// The structured analysis returned by the completion provider or the
/// fallback generator. A parsed provider body without a `source` tag is
/// treated as provider-authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBody {
    #[serde(default)]
    pub source: Option<AnalysisSource>,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub trends: Vec<Trend>,
}

impl AnalysisBody {
    pub fn source_or_provider(&self) -> AnalysisSource {
        self.source.unwrap_or(AnalysisSource::Openai)
    }
}

// ─── Report envelope ────────────────────────────────────────────────────────

/// The complete report returned to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Creation timestamp in epoch milliseconds; display identifier only.
    pub id: i64,
    pub timestamp: String,
    pub timeframe: String,
    pub platforms: Vec<String>,
    pub summary: AggregatedMetrics,
    pub source: AnalysisSource,
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
    pub trends: Vec<Trend>,
}

/// Merge the analysis body with request metadata into the response envelope.
/// `summary` always comes from the aggregator regardless of what the
/// completion result carried.
pub fn assemble_report(
    body: AnalysisBody,
    summary: AggregatedMetrics,
    platforms: Vec<String>,
    timeframe: String,
) -> AnalysisReport {
    let now = Utc::now();
    AnalysisReport {
        id: now.timestamp_millis(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        timeframe,
        platforms,
        summary,
        source: body.source_or_provider(),
        insights: body.insights,
        recommendations: body.recommendations,
        trends: body.trends,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_metrics;
    use adscope_core::types::{AnalyticsData, PlatformMetrics};

    fn sample_body(source: Option<AnalysisSource>) -> AnalysisBody {
        AnalysisBody {
            source,
            insights: vec![],
            recommendations: vec![],
            trends: vec![],
        }
    }

    fn sample_summary() -> crate::aggregate::AggregatedMetrics {
        let mut data = AnalyticsData::new();
        data.insert(
            "facebook".into(),
            PlatformMetrics::from_counters(12500.0, 600_000, 7200, 290),
        );
        aggregate_metrics(&data)
    }

    #[test]
    fn test_assemble_echoes_request_metadata() {
        let report = assemble_report(
            sample_body(Some(AnalysisSource::Mock)),
            sample_summary(),
            vec!["facebook".into()],
            "last_30_days".into(),
        );
        assert_eq!(report.timeframe, "last_30_days");
        assert_eq!(report.platforms, vec!["facebook".to_string()]);
        assert_eq!(report.source, AnalysisSource::Mock);
        assert_eq!(report.summary.total_spend, 12500.0);
        assert!(report.id > 0);
        assert!(report.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_missing_source_treated_as_provider() {
        let report = assemble_report(
            sample_body(None),
            sample_summary(),
            vec!["facebook".into()],
            "last_7_days".into(),
        );
        assert_eq!(report.source, AnalysisSource::Openai);
    }

    #[test]
    fn test_body_parses_provider_shape() {
        let json = r#"{
            "insights": [{
                "type": "performance",
                "title": "t",
                "description": "d",
                "impact": "positive",
                "recommendation": "r"
            }],
            "recommendations": [{
                "priority": "high",
                "category": "budget_optimization",
                "title": "t",
                "description": "d",
                "expectedImpact": "e",
                "implementation": "i"
            }],
            "trends": [{
                "metric": "CTR",
                "trend": "up",
                "change": "+0.2%",
                "period": "vs last period",
                "insight": "i"
            }]
        }"#;
        let body: AnalysisBody = serde_json::from_str(json).unwrap();
        assert!(body.source.is_none());
        assert_eq!(body.insights[0].insight_type, InsightType::Performance);
        assert_eq!(
            body.recommendations[0].category,
            RecommendationCategory::BudgetOptimization
        );
        assert_eq!(body.trends[0].trend, TrendDirection::Up);
    }
}
