//! The workspace settings document with sectioned partial update.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub timezone: String,
    pub currency: String,
    pub date_format: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub theme: String,
    pub compact_mode: bool,
    pub show_advanced_metrics: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackIntegration {
    pub enabled: bool,
    pub webhook: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZapierIntegration {
    pub enabled: bool,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationSettings {
    pub slack: SlackIntegration,
    pub zapier: ZapierIntegration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub data_retention: u32,
    pub share_analytics: bool,
    pub allow_cookies: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsDocument {
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub display: DisplaySettings,
    pub integrations: IntegrationSettings,
    pub privacy: PrivacySettings,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            general: GeneralSettings {
                timezone: "UTC".into(),
                currency: "USD".into(),
                date_format: "MM/DD/YYYY".into(),
                language: "en".into(),
            },
            notifications: NotificationSettings {
                email: true,
                push: true,
                sms: false,
                frequency: "daily".into(),
            },
            display: DisplaySettings {
                theme: "light".into(),
                compact_mode: false,
                show_advanced_metrics: true,
            },
            integrations: IntegrationSettings {
                slack: SlackIntegration {
                    enabled: false,
                    webhook: String::new(),
                },
                zapier: ZapierIntegration {
                    enabled: false,
                    api_key: String::new(),
                },
            },
            privacy: PrivacySettings {
                data_retention: 90,
                share_analytics: false,
                allow_cookies: true,
            },
        }
    }
}

/// Sectioned partial update; absent sections are untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub general: Option<GeneralSettings>,
    pub notifications: Option<NotificationSettings>,
    pub display: Option<DisplaySettings>,
    pub integrations: Option<IntegrationSettings>,
    pub privacy: Option<PrivacySettings>,
}

/// Holds the single settings document for the workspace.
pub struct SettingsStore {
    document: Mutex<SettingsDocument>,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            document: Mutex::new(SettingsDocument::default()),
        }
    }

    pub fn get(&self) -> SettingsDocument {
        self.document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn update(&self, update: SettingsUpdate) -> SettingsDocument {
        let mut doc = self
            .document
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(general) = update.general {
            doc.general = general;
        }
        if let Some(notifications) = update.notifications {
            doc.notifications = notifications;
        }
        if let Some(display) = update.display {
            doc.display = display;
        }
        if let Some(integrations) = update.integrations {
            doc.integrations = integrations;
        }
        if let Some(privacy) = update.privacy {
            doc.privacy = privacy;
        }
        doc.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_wire_format() {
        let json = serde_json::to_string(&SettingsDocument::default()).unwrap();
        assert!(json.contains("\"dateFormat\":\"MM/DD/YYYY\""));
        assert!(json.contains("\"dataRetention\":90"));
        assert!(json.contains("\"compactMode\":false"));
    }

    #[test]
    fn test_partial_update_keeps_other_sections() {
        let store = SettingsStore::new();
        let updated = store.update(SettingsUpdate {
            display: Some(DisplaySettings {
                theme: "dark".into(),
                compact_mode: true,
                show_advanced_metrics: false,
            }),
            ..SettingsUpdate::default()
        });
        assert_eq!(updated.display.theme, "dark");
        assert_eq!(updated.general.timezone, "UTC");
        assert!(updated.notifications.email);
    }
}
