//! Metric aggregation — totals, overall ratios, and the per-platform
//! breakdown with share percentages.

use adscope_core::types::{AnalyticsData, PlatformMetrics};
use serde::{Deserialize, Serialize};

/// Totals and derived ratios over all platforms in a request.
///
/// Ratio fields are pre-formatted display strings (2 decimals; shares 1
/// decimal) to match the dashboard contract. Callers needing numbers must
/// re-parse. Zero denominators clamp to 0 so serialized JSON never carries
/// NaN or Infinity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedMetrics {
    pub total_spend: f64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub overall_ctr: String,
    pub overall_cpc: String,
    pub overall_conversion_rate: String,
    pub platform_breakdown: Vec<PlatformShare>,
}

/// One platform's raw metrics augmented with its share of the totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformShare {
    pub platform: String,
    #[serde(flatten)]
    pub metrics: PlatformMetrics,
    pub share_of_spend: String,
    pub share_of_conversions: String,
}

/// Percentage of `part` in `total`, clamped to 0 when the total is 0.
fn share_pct(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Reduce per-platform metrics into totals, overall ratios, and an ordered
/// breakdown. Pure: totals are permutation-independent, and the breakdown
/// follows the input map's iteration order.
pub fn aggregate_metrics(data: &AnalyticsData) -> AggregatedMetrics {
    let total_spend: f64 = data.values().map(|m| m.spend).sum();
    let total_impressions: u64 = data.values().map(|m| m.impressions).sum();
    let total_clicks: u64 = data.values().map(|m| m.clicks).sum();
    let total_conversions: u64 = data.values().map(|m| m.conversions).sum();

    let overall_ctr = share_pct(total_clicks as f64, total_impressions as f64);
    let overall_cpc = if total_clicks > 0 {
        total_spend / total_clicks as f64
    } else {
        0.0
    };
    let overall_conversion_rate = share_pct(total_conversions as f64, total_clicks as f64);

    let platform_breakdown = data
        .iter()
        .map(|(platform, metrics)| PlatformShare {
            platform: platform.clone(),
            metrics: metrics.clone(),
            share_of_spend: format!("{:.1}", share_pct(metrics.spend, total_spend)),
            share_of_conversions: format!(
                "{:.1}",
                share_pct(metrics.conversions as f64, total_conversions as f64)
            ),
        })
        .collect();

    AggregatedMetrics {
        total_spend,
        total_impressions,
        total_clicks,
        total_conversions,
        overall_ctr: format!("{overall_ctr:.2}"),
        overall_cpc: format!("{overall_cpc:.2}"),
        overall_conversion_rate: format!("{overall_conversion_rate:.2}"),
        platform_breakdown,
    }
}
