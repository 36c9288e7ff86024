//! Shared domain types — per-platform ad metrics as ingested from the
//! dashboard and echoed back in reports.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw metrics for a single ad platform over the requested timeframe.
///
/// Field names follow the dashboard wire format: the derived ratios keep the
/// platform APIs' snake_case (`conversion_rate`), counters are plain words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformMetrics {
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub conversion_rate: f64,
}

/// Per-platform metrics keyed by caller-supplied platform name.
///
/// Keys are opaque here: the pipeline does not validate them against a known
/// platform set. BTreeMap keeps iteration order stable across requests.
pub type AnalyticsData = BTreeMap<String, PlatformMetrics>;

impl PlatformMetrics {
    /// Construct with derived ratios computed from the counters.
    /// Zero denominators yield 0 rather than NaN/Infinity.
    pub fn from_counters(spend: f64, impressions: u64, clicks: u64, conversions: u64) -> Self {
        let ctr = if impressions > 0 {
            clicks as f64 / impressions as f64 * 100.0
        } else {
            0.0
        };
        let cpc = if clicks > 0 { spend / clicks as f64 } else { 0.0 };
        let cpm = if impressions > 0 {
            spend / impressions as f64 * 1000.0
        } else {
            0.0
        };
        let conversion_rate = if clicks > 0 {
            conversions as f64 / clicks as f64 * 100.0
        } else {
            0.0
        };
        Self {
            spend,
            impressions,
            clicks,
            conversions,
            ctr,
            cpc,
            cpm,
            conversion_rate,
        }
    }
}
