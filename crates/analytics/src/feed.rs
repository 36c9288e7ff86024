//! Static insight feed shown on the dashboard sidebar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsInsight {
    pub id: String,
    pub platform: String,
    #[serde(rename = "type")]
    pub insight_type: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub impact: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightFeed {
    pub insights: Vec<AnalyticsInsight>,
    pub total_insights: usize,
    pub critical_insights: usize,
}

pub fn insight_feed() -> InsightFeed {
    let insights = vec![
        AnalyticsInsight {
            id: "insight_001".into(),
            platform: "facebook".into(),
            insight_type: "performance".into(),
            title: "High CTR on Facebook Campaigns".into(),
            description: "Facebook campaigns are performing above industry average with 1.2% CTR"
                .into(),
            priority: "high".into(),
            impact: "positive".into(),
            recommendation: "Consider increasing budget allocation to Facebook campaigns".into(),
        },
        AnalyticsInsight {
            id: "insight_002".into(),
            platform: "google".into(),
            insight_type: "cost".into(),
            title: "Optimize Google Search Costs".into(),
            description: "Google CPC is slightly higher than average at $1.85".into(),
            priority: "medium".into(),
            impact: "warning".into(),
            recommendation: "Review bidding strategies and keyword optimization".into(),
        },
        AnalyticsInsight {
            id: "insight_003".into(),
            platform: "tiktok".into(),
            insight_type: "reach".into(),
            title: "TikTok Shows High Engagement".into(),
            description: "TikTok campaigns have high engagement but lower conversion rates".into(),
            priority: "low".into(),
            impact: "positive".into(),
            recommendation: "Focus on improving landing page experience for TikTok traffic".into(),
        },
    ];

    let total_insights = insights.len();
    let critical_insights = insights.iter().filter(|i| i.priority == "high").count();

    InsightFeed {
        insights,
        total_insights,
        critical_insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_counts() {
        let feed = insight_feed();
        assert_eq!(feed.total_insights, 3);
        assert_eq!(feed.critical_insights, 1);
    }
}
