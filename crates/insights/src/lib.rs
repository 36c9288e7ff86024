//! AI-report pipeline: aggregate per-platform metrics, render an analysis
//! prompt, call the completion provider behind a local throttle, fall back to
//! the deterministic generator when anything goes wrong, and assemble the
//! final report envelope.
//!
//! Data flow: `AnalyticsData` → [`aggregate`] → [`prompt`] → [`rate_limit`]
//! gate → [`completion`] (provider call or [`fallback`]) → [`report`].

pub mod aggregate;
pub mod completion;
pub mod fallback;
pub mod prompt;
pub mod rate_limit;
pub mod report;

pub use aggregate::{aggregate_metrics, AggregatedMetrics, PlatformShare};
pub use completion::{CompletionClient, SYSTEM_PROMPT};
pub use fallback::{generate_structured_analysis, FallbackSignals};
pub use prompt::{build_analysis_prompt, build_optimization_prompt, build_platform_prompt};
pub use rate_limit::{Clock, CompletionRateLimiter, SystemClock};
pub use report::{
    assemble_report, AnalysisBody, AnalysisReport, AnalysisSource, Impact, Insight, InsightType,
    Priority, Recommendation, RecommendationCategory, Trend, TrendDirection,
};
