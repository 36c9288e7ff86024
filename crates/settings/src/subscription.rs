//! Subscription presentation: plan features, usage counters, and
//! plan-dependent limits.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Basic,
    Pro,
    Enterprise,
}

/// A numeric cap or "unlimited", matching the dashboard wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanLimit {
    Count(u32),
    Unlimited(String),
}

impl PlanLimit {
    pub fn unlimited() -> Self {
        PlanLimit::Unlimited("unlimited".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageCounters {
    pub platforms_connected: u32,
    pub reports_generated: u32,
    pub ai_insights_used: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    pub platforms: PlanLimit,
    pub reports: PlanLimit,
    pub ai_insights: PlanLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    pub plan: Plan,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub features: BTreeMap<String, Vec<String>>,
    pub usage: UsageCounters,
    pub limits: PlanLimits,
}

fn feature_matrix() -> BTreeMap<String, Vec<String>> {
    let mut features = BTreeMap::new();
    features.insert(
        "free".to_string(),
        vec![
            "Basic analytics".to_string(),
            "2 platform connections".to_string(),
            "Email support".to_string(),
        ],
    );
    features.insert(
        "basic".to_string(),
        vec![
            "Advanced analytics".to_string(),
            "5 platform connections".to_string(),
            "AI insights".to_string(),
            "Priority support".to_string(),
        ],
    );
    features.insert(
        "pro".to_string(),
        vec![
            "Unlimited analytics".to_string(),
            "Unlimited platforms".to_string(),
            "Custom reports".to_string(),
            "API access".to_string(),
            "Dedicated support".to_string(),
        ],
    );
    features.insert(
        "enterprise".to_string(),
        vec![
            "Everything in Pro".to_string(),
            "Custom integrations".to_string(),
            "White-label options".to_string(),
            "Account manager".to_string(),
        ],
    );
    features
}

fn limits_for(plan: Plan) -> PlanLimits {
    match plan {
        Plan::Free => PlanLimits {
            platforms: PlanLimit::Count(2),
            reports: PlanLimit::Count(5),
            ai_insights: PlanLimit::Count(3),
        },
        Plan::Basic => PlanLimits {
            platforms: PlanLimit::Count(5),
            reports: PlanLimit::unlimited(),
            ai_insights: PlanLimit::unlimited(),
        },
        Plan::Pro | Plan::Enterprise => PlanLimits {
            platforms: PlanLimit::unlimited(),
            reports: PlanLimit::unlimited(),
            ai_insights: PlanLimit::unlimited(),
        },
    }
}

/// Build the subscription view for the demo workspace's plan.
pub fn subscription_view(plan: Plan) -> SubscriptionView {
    SubscriptionView {
        plan,
        status: "active".to_string(),
        start_date: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap(),
        features: feature_matrix(),
        usage: UsageCounters {
            platforms_connected: 3,
            reports_generated: 15,
            ai_insights_used: 8,
        },
        limits: limits_for(plan),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_plan_limits_are_counts() {
        let view = subscription_view(Plan::Free);
        assert_eq!(view.limits.platforms, PlanLimit::Count(2));
        assert_eq!(view.limits.reports, PlanLimit::Count(5));
        assert_eq!(view.limits.ai_insights, PlanLimit::Count(3));
    }

    #[test]
    fn test_basic_plan_mixes_count_and_unlimited() {
        let view = subscription_view(Plan::Basic);
        assert_eq!(view.limits.platforms, PlanLimit::Count(5));
        assert_eq!(view.limits.reports, PlanLimit::unlimited());
    }

    #[test]
    fn test_limit_wire_format() {
        let json = serde_json::to_string(&subscription_view(Plan::Basic)).unwrap();
        assert!(json.contains("\"platforms\":5"));
        assert!(json.contains("\"reports\":\"unlimited\""));
        assert!(json.contains("\"aiInsights\":\"unlimited\""));
    }

    #[test]
    fn test_feature_matrix_covers_all_plans() {
        let view = subscription_view(Plan::Pro);
        assert_eq!(view.features.len(), 4);
        assert!(view.features["pro"].contains(&"API access".to_string()));
    }
}
