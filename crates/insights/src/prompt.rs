//! Prompt rendering for the completion provider.
//!
//! The rendered text is also the channel the fallback generator reads its
//! numeric signals from, so the context block is a contract: the literal
//! markers `Total Spend: $`, `Overall CTR: ` and `Overall Conversion Rate: `
//! must immediately precede the formatted values.

use crate::aggregate::AggregatedMetrics;
use adscope_core::types::AnalyticsData;
use std::fmt::Write;

/// Render an integer with thousands separators (12500 → "12,500").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render a monetary amount with thousands separators; whole amounts drop
/// the fraction (12500.0 → "12,500", 12500.5 → "12,500.50").
pub fn group_amount(v: f64) -> String {
    let whole = v.trunc() as u64;
    if v.fract().abs() < f64::EPSILON {
        group_thousands(whole)
    } else {
        format!("{}.{:02}", group_thousands(whole), (v.fract() * 100.0).round() as u64)
    }
}

/// Render the full analysis request: context summary, one paragraph per
/// platform, the five analysis dimensions, and the exact JSON shape the
/// response parser expects.
pub fn build_analysis_prompt(
    platforms: &[String],
    timeframe: &str,
    data: &AnalyticsData,
    aggregated: &AggregatedMetrics,
) -> String {
    let mut platform_blocks = String::new();
    for (name, m) in data {
        let _ = write!(
            platform_blocks,
            "\n{}:\n- Spend: ${}\n- Impressions: {}\n- Clicks: {}\n- Conversions: {}\n- CTR: {}%\n- CPC: ${}\n- CPM: ${}\n- Conversion Rate: {}%\n",
            name.to_uppercase(),
            group_amount(m.spend),
            group_thousands(m.impressions),
            group_thousands(m.clicks),
            m.conversions,
            m.ctr,
            m.cpc,
            m.cpm,
            m.conversion_rate,
        );
    }

    format!(
        r#"You are an expert digital advertising analyst. Analyze the following advertising data and provide professional insights and recommendations.

CONTEXT:
- Timeframe: {timeframe}
- Platforms: {platforms}
- Total Spend: ${total_spend}
- Total Impressions: {total_impressions}
- Total Clicks: {total_clicks}
- Total Conversions: {total_conversions}
- Overall CTR: {overall_ctr}%
- Overall CPC: ${overall_cpc}
- Overall Conversion Rate: {overall_conversion_rate}%

PLATFORM DATA:
{platform_blocks}
TASK:
Provide a comprehensive analysis including:
1. Key Performance Insights (3-4 insights with positive/warning/negative impact indicators)
2. Specific Recommendations (3-4 actionable recommendations with priority levels)
3. Performance Trends (3 key metrics with trend analysis)
4. Budget Optimization Suggestions
5. Creative and Targeting Recommendations

Format the response as JSON with the following structure:
{{
  "insights": [
    {{
      "type": "performance|cost|reach|conversion",
      "title": "Insight Title",
      "description": "Detailed description",
      "impact": "positive|warning|negative",
      "recommendation": "Actionable recommendation"
    }}
  ],
  "recommendations": [
    {{
      "priority": "high|medium|low",
      "category": "budget_optimization|creative_optimization|audience_expansion|bidding_strategy",
      "title": "Recommendation Title",
      "description": "Detailed description",
      "expectedImpact": "Expected outcome",
      "implementation": "Implementation steps"
    }}
  ],
  "trends": [
    {{
      "metric": "Metric Name",
      "trend": "up|down",
      "change": "Change percentage",
      "period": "Comparison period",
      "insight": "Trend explanation"
    }}
  ]
}}

Focus on actionable insights that can improve performance and ROI."#,
        timeframe = timeframe,
        platforms = platforms.join(", "),
        total_spend = group_amount(aggregated.total_spend),
        total_impressions = group_thousands(aggregated.total_impressions),
        total_clicks = group_thousands(aggregated.total_clicks),
        total_conversions = aggregated.total_conversions,
        overall_ctr = aggregated.overall_ctr,
        overall_cpc = aggregated.overall_cpc,
        overall_conversion_rate = aggregated.overall_conversion_rate,
        platform_blocks = platform_blocks,
    )
}

/// Render a platform-specific insight request around the raw data document.
pub fn build_platform_prompt(platform: &str, data: &serde_json::Value) -> String {
    let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"Analyze the following {platform} advertising data and provide specific insights:

{rendered}

Provide 3-4 specific insights for {platform} optimization in JSON format:

{{
  "insights": [
    {{
      "type": "performance|cost|reach|conversion",
      "title": "Insight Title",
      "description": "Detailed description",
      "impact": "positive|warning|negative",
      "recommendation": "Actionable recommendation"
    }}
  ]
}}"#
    )
}

/// Render an optimization-recommendation request from data plus goals.
pub fn build_optimization_prompt(
    analytics_data: &serde_json::Value,
    goals: &serde_json::Value,
) -> String {
    let data = serde_json::to_string_pretty(analytics_data).unwrap_or_else(|_| "{}".to_string());
    let goals = serde_json::to_string_pretty(goals).unwrap_or_else(|_| "{}".to_string());
    format!(
        r#"Based on the following advertising data and goals, provide optimization recommendations:

Data: {data}
Goals: {goals}

Provide 5-7 specific optimization recommendations in JSON format:

{{
  "recommendations": [
    {{
      "priority": "high|medium|low",
      "category": "budget_optimization|creative_optimization|audience_expansion|bidding_strategy",
      "title": "Recommendation Title",
      "description": "Detailed description",
      "expectedImpact": "Expected outcome",
      "implementation": "Implementation steps"
    }}
  ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate_metrics;
    use adscope_core::types::{AnalyticsData, PlatformMetrics};

    fn fixture() -> (Vec<String>, AnalyticsData, AggregatedMetrics) {
        let mut data = AnalyticsData::new();
        data.insert(
            "facebook".into(),
            PlatformMetrics {
                spend: 12500.0,
                impressions: 600_000,
                clicks: 7200,
                conversions: 290,
                ctr: 1.2,
                cpc: 1.74,
                cpm: 20.83,
                conversion_rate: 4.03,
            },
        );
        let agg = aggregate_metrics(&data);
        (vec!["facebook".into()], data, agg)
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12500), "12,500");
        assert_eq!(group_thousands(1_250_000), "1,250,000");
    }

    #[test]
    fn test_group_amount_drops_whole_fraction() {
        assert_eq!(group_amount(28890.0), "28,890");
        assert_eq!(group_amount(1234.5), "1,234.50");
    }

    #[test]
    fn test_prompt_carries_literal_markers() {
        let (platforms, data, agg) = fixture();
        let prompt = build_analysis_prompt(&platforms, "last_30_days", &data, &agg);
        assert!(prompt.contains("Total Spend: $12,500"));
        assert!(prompt.contains("Overall CTR: 1.20%"));
        assert!(prompt.contains("Overall Conversion Rate: 4.03%"));
        assert!(prompt.contains("- Timeframe: last_30_days"));
        assert!(prompt.contains("- Platforms: facebook"));
    }

    #[test]
    fn test_prompt_renders_platform_paragraphs() {
        let (platforms, data, agg) = fixture();
        let prompt = build_analysis_prompt(&platforms, "last_30_days", &data, &agg);
        assert!(prompt.contains("FACEBOOK:"));
        assert!(prompt.contains("- Impressions: 600,000"));
        assert!(prompt.contains("- CPM: $20.83"));
        assert!(prompt.contains("\"expectedImpact\""));
    }

    #[test]
    fn test_platform_prompt_embeds_document() {
        let prompt = build_platform_prompt("tiktok", &serde_json::json!({"spend": 7490}));
        assert!(prompt.contains("tiktok advertising data"));
        assert!(prompt.contains("\"spend\": 7490"));
        // No aggregate markers in platform-specific prompts.
        assert!(!prompt.contains("Total Spend: $"));
    }
}
