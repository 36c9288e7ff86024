//! Analytics endpoints. Date-range parameters are accepted for contract
//! compatibility; the fixture provider has nothing to filter.

use crate::envelope::{ApiError, Envelope};
use crate::state::AppState;
use adscope_analytics::{
    CampaignReport, InsightFeed, PerformanceSummary, PlatformDetail, RealtimeSnapshot,
    UnifiedAnalytics,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// GET /api/analytics/unified — cross-platform snapshot.
pub async fn unified(
    State(state): State<AppState>,
    Query(_range): Query<DateRangeQuery>,
) -> Json<Envelope<UnifiedAnalytics>> {
    Envelope::ok(state.analytics.unified())
}

/// GET /api/analytics/platform/:platform — single-platform detail.
pub async fn platform(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(_range): Query<DateRangeQuery>,
) -> Result<Json<Envelope<PlatformDetail>>, (StatusCode, Json<ApiError>)> {
    state
        .analytics
        .platform(&platform)
        .map(Envelope::ok)
        .ok_or_else(|| ApiError::not_found("Platform not found"))
}

/// GET /api/analytics/campaigns — campaign listing, spend-descending.
pub async fn campaigns(
    State(state): State<AppState>,
    Query(_range): Query<DateRangeQuery>,
) -> Json<Envelope<CampaignReport>> {
    Envelope::ok(state.analytics.campaigns())
}

/// GET /api/analytics/performance — ratios, totals, breakdown.
pub async fn performance(
    State(state): State<AppState>,
    Query(_range): Query<DateRangeQuery>,
) -> Json<Envelope<PerformanceSummary>> {
    Envelope::ok(state.analytics.performance())
}

/// GET /api/analytics/insights — static insight feed.
pub async fn insights(
    State(state): State<AppState>,
    Query(_range): Query<DateRangeQuery>,
) -> Json<Envelope<InsightFeed>> {
    Envelope::ok(state.analytics.insights())
}

/// GET /api/analytics/realtime — simulated live counters.
pub async fn realtime(State(state): State<AppState>) -> Json<Envelope<RealtimeSnapshot>> {
    Envelope::ok(state.analytics.realtime())
}
