//! In-memory alert store and threshold settings.

use chrono::{DateTime, TimeZone, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// An alert as shown in the dashboard inbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Payload for creating an alert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

// ─── Settings ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceAlertConfig {
    pub enabled: bool,
    pub cpc_threshold: i32,
    pub ctr_threshold: i32,
    pub conversion_rate_threshold: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlertConfig {
    pub enabled: bool,
    pub daily_budget_threshold: i32,
    pub total_budget_threshold: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomAlertRule {
    pub id: String,
    pub name: String,
    pub metric: String,
    pub condition: String,
    pub value: f64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub performance_alerts: PerformanceAlertConfig,
    pub budget_alerts: BudgetAlertConfig,
    pub custom_alerts: Vec<CustomAlertRule>,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            performance_alerts: PerformanceAlertConfig {
                enabled: true,
                cpc_threshold: 10,
                ctr_threshold: -15,
                conversion_rate_threshold: -20,
            },
            budget_alerts: BudgetAlertConfig {
                enabled: true,
                daily_budget_threshold: 90,
                total_budget_threshold: 95,
            },
            custom_alerts: vec![CustomAlertRule {
                id: "custom_001".into(),
                name: "High Spend Alert".into(),
                metric: "spend".into(),
                condition: "greater_than".into(),
                value: 1000.0,
                enabled: true,
            }],
        }
    }
}

/// Sectioned partial update; absent sections keep their current values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettingsUpdate {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub performance_alerts: Option<PerformanceAlertConfig>,
    pub budget_alerts: Option<BudgetAlertConfig>,
    pub custom_alerts: Option<Vec<CustomAlertRule>>,
}

// ─── Store ──────────────────────────────────────────────────────────────────

/// Thread-safe in-memory alert inbox, seeded with the demo alerts.
pub struct AlertStore {
    alerts: DashMap<String, Alert>,
    settings: Mutex<AlertSettings>,
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertStore {
    pub fn new() -> Self {
        let store = Self {
            alerts: DashMap::new(),
            settings: Mutex::new(AlertSettings::default()),
        };
        store.seed_demo_alerts();
        info!("Alert store initialized (in-memory, development mode)");
        store
    }

    /// All alerts, newest first.
    pub fn list(&self) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self.alerts.iter().map(|r| r.value().clone()).collect();
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        alerts
    }

    pub fn create(&self, req: CreateAlert) -> Alert {
        let now = Utc::now();
        let alert = Alert {
            id: format!("alert_{}", now.timestamp_millis()),
            alert_type: req.alert_type,
            title: req.title,
            message: req.message,
            severity: req.severity,
            platform: req.platform,
            created_at: now,
            is_read: false,
            data: req.data,
        };
        self.alerts.insert(alert.id.clone(), alert.clone());
        alert
    }

    pub fn mark_read(&self, alert_id: &str) -> bool {
        match self.alerts.get_mut(alert_id) {
            Some(mut entry) => {
                entry.value_mut().is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn delete(&self, alert_id: &str) -> bool {
        self.alerts.remove(alert_id).is_some()
    }

    pub fn settings(&self) -> AlertSettings {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn update_settings(&self, update: AlertSettingsUpdate) -> AlertSettings {
        let mut settings = self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(v) = update.email_notifications {
            settings.email_notifications = v;
        }
        if let Some(v) = update.push_notifications {
            settings.push_notifications = v;
        }
        if let Some(v) = update.performance_alerts {
            settings.performance_alerts = v;
        }
        if let Some(v) = update.budget_alerts {
            settings.budget_alerts = v;
        }
        if let Some(v) = update.custom_alerts {
            settings.custom_alerts = v;
        }
        settings.clone()
    }

    fn seed_demo_alerts(&self) {
        let seeds = [
            Alert {
                id: "alert_001".into(),
                alert_type: "performance".into(),
                title: "High Cost per Click Alert".into(),
                message: "Your Google Ads CPC has increased by 15% in the last 24 hours".into(),
                severity: Severity::Warning,
                platform: Some("google".into()),
                created_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 30, 0).unwrap(),
                is_read: false,
                data: Some(serde_json::json!({
                    "metric": "CPC",
                    "change": "+15%",
                    "threshold": 10,
                })),
            },
            Alert {
                id: "alert_002".into(),
                alert_type: "budget".into(),
                title: "Budget Limit Reached".into(),
                message: "Facebook campaign 'Summer Sale' has reached 90% of daily budget".into(),
                severity: Severity::Info,
                platform: Some("facebook".into()),
                created_at: Utc.with_ymd_and_hms(2024, 1, 20, 9, 15, 0).unwrap(),
                is_read: true,
                data: Some(serde_json::json!({
                    "campaign": "Summer Sale",
                    "budgetUsed": 90,
                    "threshold": 90,
                })),
            },
            Alert {
                id: "alert_003".into(),
                alert_type: "conversion".into(),
                title: "Conversion Rate Drop".into(),
                message: "TikTok conversion rate has dropped by 20% compared to last week".into(),
                severity: Severity::Critical,
                platform: Some("tiktok".into()),
                created_at: Utc.with_ymd_and_hms(2024, 1, 20, 8, 45, 0).unwrap(),
                is_read: false,
                data: Some(serde_json::json!({
                    "metric": "Conversion Rate",
                    "change": "-20%",
                    "threshold": -15,
                })),
            },
        ];
        for alert in seeds {
            self.alerts.insert(alert.id.clone(), alert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_alerts_newest_first() {
        let store = AlertStore::new();
        let alerts = store.list();
        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].id, "alert_001");
        assert_eq!(alerts[2].id, "alert_003");
    }

    #[test]
    fn test_create_mark_read_delete_lifecycle() {
        let store = AlertStore::new();
        let alert = store.create(CreateAlert {
            alert_type: "performance".into(),
            title: "CPM spike".into(),
            message: "CPM up 30% on tiktok".into(),
            severity: Severity::Warning,
            platform: Some("tiktok".into()),
            data: None,
        });
        assert!(!alert.is_read);
        assert!(alert.id.starts_with("alert_"));

        assert!(store.mark_read(&alert.id));
        let listed = store.list();
        let stored = listed.iter().find(|a| a.id == alert.id).unwrap();
        assert!(stored.is_read);

        assert!(store.delete(&alert.id));
        assert!(!store.delete(&alert.id));
        assert!(!store.mark_read(&alert.id));
    }

    #[test]
    fn test_settings_partial_update() {
        let store = AlertStore::new();
        let updated = store.update_settings(AlertSettingsUpdate {
            email_notifications: Some(false),
            ..AlertSettingsUpdate::default()
        });
        assert!(!updated.email_notifications);
        // Untouched sections keep their defaults.
        assert!(updated.push_notifications);
        assert_eq!(updated.performance_alerts.cpc_threshold, 10);
        assert_eq!(updated.custom_alerts.len(), 1);
    }

    #[test]
    fn test_severity_wire_format() {
        let store = AlertStore::new();
        let json = serde_json::to_string(&store.list()).unwrap();
        assert!(json.contains("\"severity\":\"critical\""));
        assert!(json.contains("\"isRead\":false"));
        assert!(json.contains("\"createdAt\""));
    }
}
