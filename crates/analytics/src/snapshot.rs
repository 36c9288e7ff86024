//! Unified, per-platform, and performance snapshots.

use crate::campaigns::{self, Campaign};
use adscope_core::types::PlatformMetrics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overall ratio metrics shown on the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRatios {
    pub ctr: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub conversion_rate: f64,
    pub roas: f64,
}

/// The full cross-platform snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedAnalytics {
    pub total_spend: f64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    pub total_conversions: u64,
    pub performance: PerformanceRatios,
    pub platform_breakdown: BTreeMap<String, PlatformMetrics>,
    pub campaigns: Vec<Campaign>,
}

/// Raw spend/volume totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

/// Ratios plus totals plus the per-platform breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub metrics: PerformanceRatios,
    pub totals: Totals,
    pub platform_breakdown: BTreeMap<String, PlatformMetrics>,
}

/// A single platform's metrics with its campaigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformDetail {
    #[serde(flatten)]
    pub metrics: PlatformMetrics,
    pub campaigns: Vec<PlatformCampaign>,
}

/// Campaign line item inside a platform detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformCampaign {
    pub id: String,
    pub name: String,
    pub status: String,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
}

pub(crate) fn fixture_breakdown() -> BTreeMap<String, PlatformMetrics> {
    let mut breakdown = BTreeMap::new();
    breakdown.insert(
        "facebook".to_string(),
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
    breakdown.insert(
        "google".to_string(),
        PlatformMetrics {
            spend: 8900.0,
            impressions: 450_000,
            clicks: 4800,
            conversions: 190,
            ctr: 1.07,
            cpc: 1.85,
            cpm: 19.78,
            conversion_rate: 3.96,
        },
    );
    breakdown.insert(
        "tiktok".to_string(),
        PlatformMetrics {
            spend: 7490.0,
            impressions: 200_000,
            clicks: 2500,
            conversions: 100,
            ctr: 1.25,
            cpc: 3.0,
            cpm: 37.45,
            conversion_rate: 4.0,
        },
    );
    breakdown
}

fn fixture_ratios() -> PerformanceRatios {
    PerformanceRatios {
        ctr: 1.16,
        cpc: 1.99,
        cpm: 23.11,
        conversion_rate: 4.0,
        roas: 3.2,
    }
}

pub fn unified_snapshot() -> UnifiedAnalytics {
    UnifiedAnalytics {
        total_spend: 28890.0,
        total_impressions: 1_250_000,
        total_clicks: 14_500,
        total_conversions: 580,
        performance: fixture_ratios(),
        platform_breakdown: fixture_breakdown(),
        campaigns: campaigns::fixture_campaigns(),
    }
}

pub fn performance_summary() -> PerformanceSummary {
    PerformanceSummary {
        metrics: fixture_ratios(),
        totals: Totals {
            spend: 28890.0,
            impressions: 1_250_000,
            clicks: 14_500,
            conversions: 580,
        },
        platform_breakdown: fixture_breakdown(),
    }
}

pub fn platform_detail(platform: &str) -> Option<PlatformDetail> {
    let metrics = fixture_breakdown().remove(platform)?;
    let campaigns = match platform {
        "facebook" => vec![
            PlatformCampaign {
                id: "fb_camp_001".into(),
                name: "Summer Sale Campaign".into(),
                status: "active".into(),
                spend: 8500.0,
                impressions: 400_000,
                clicks: 4800,
                conversions: 192,
            },
            PlatformCampaign {
                id: "fb_camp_002".into(),
                name: "Retargeting Campaign".into(),
                status: "active".into(),
                spend: 4000.0,
                impressions: 200_000,
                clicks: 2400,
                conversions: 98,
            },
        ],
        "google" => vec![
            PlatformCampaign {
                id: "google_camp_001".into(),
                name: "Brand Awareness".into(),
                status: "active".into(),
                spend: 6200.0,
                impressions: 300_000,
                clicks: 3200,
                conversions: 128,
            },
            PlatformCampaign {
                id: "google_camp_002".into(),
                name: "Search Campaign".into(),
                status: "active".into(),
                spend: 2700.0,
                impressions: 150_000,
                clicks: 1600,
                conversions: 62,
            },
        ],
        "tiktok" => vec![PlatformCampaign {
            id: "tiktok_camp_001".into(),
            name: "Product Launch".into(),
            status: "active".into(),
            spend: 7490.0,
            impressions: 200_000,
            clicks: 2500,
            conversions: 100,
        }],
        _ => Vec::new(),
    };
    Some(PlatformDetail { metrics, campaigns })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_totals_match_breakdown() {
        let snapshot = unified_snapshot();
        let spend: f64 = snapshot.platform_breakdown.values().map(|m| m.spend).sum();
        assert_eq!(spend, snapshot.total_spend);
        let conversions: u64 = snapshot
            .platform_breakdown
            .values()
            .map(|m| m.conversions)
            .sum();
        assert_eq!(conversions, snapshot.total_conversions);
    }

    #[test]
    fn test_platform_detail_known_and_unknown() {
        let fb = platform_detail("facebook").unwrap();
        assert_eq!(fb.campaigns.len(), 2);
        assert_eq!(fb.metrics.spend, 12500.0);
        assert!(platform_detail("myspace").is_none());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&unified_snapshot()).unwrap();
        assert!(json.contains("\"totalSpend\""));
        assert!(json.contains("\"platformBreakdown\""));
        assert!(json.contains("\"conversionRate\":4.0"));
    }
}
