//! Analytics snapshots served to the dashboard.
//!
//! Every figure here is demo fixture data; swap the fixture tables for the
//! platform connectors' real pulls in production. The shapes are the wire
//! contract the dashboard renders.

pub mod campaigns;
pub mod feed;
pub mod realtime;
pub mod snapshot;

pub use campaigns::{Campaign, CampaignReport, CampaignStatus};
pub use feed::{AnalyticsInsight, InsightFeed};
pub use realtime::RealtimeSnapshot;
pub use snapshot::{PerformanceRatios, PerformanceSummary, PlatformDetail, UnifiedAnalytics};

/// Stateless provider for the analytics endpoints.
#[derive(Debug, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    pub fn unified(&self) -> UnifiedAnalytics {
        snapshot::unified_snapshot()
    }

    /// Per-platform detail; None for platforms with no fixture.
    pub fn platform(&self, platform: &str) -> Option<PlatformDetail> {
        snapshot::platform_detail(platform)
    }

    pub fn campaigns(&self) -> CampaignReport {
        campaigns::campaign_report()
    }

    pub fn performance(&self) -> PerformanceSummary {
        snapshot::performance_summary()
    }

    pub fn insights(&self) -> InsightFeed {
        feed::insight_feed()
    }

    pub fn realtime(&self) -> RealtimeSnapshot {
        realtime::realtime_snapshot()
    }
}
