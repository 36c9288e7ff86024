//! Connection registry and platform catalog.

use chrono::{DateTime, TimeZone, Utc};
use dashmap::DashMap;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Available,
    ComingSoon,
}

/// A linked ad-platform account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedPlatform {
    pub id: String,
    pub platform: String,
    pub name: String,
    pub status: ConnectionStatus,
    pub connected_at: DateTime<Utc>,
    pub account_name: String,
    pub account_id: String,
    pub last_sync: DateTime<Utc>,
    pub spend: f64,
    pub campaigns: u32,
}

/// Catalog entry for a platform that can be linked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailablePlatform {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub status: ConnectionStatus,
    pub features: Vec<String>,
}

/// Outcome of a manual sync.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub last_sync: DateTime<Utc>,
    pub campaigns_synced: u32,
    pub data_points: u32,
}

/// In-memory connection store, seeded with the demo accounts.
pub struct PlatformRegistry {
    connections: DashMap<String, ConnectedPlatform>,
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformRegistry {
    pub fn new() -> Self {
        let registry = Self {
            connections: DashMap::new(),
        };
        registry.seed_demo_connections();
        info!("Platform registry initialized (in-memory, development mode)");
        registry
    }

    /// All linked accounts, most recently connected first.
    pub fn list_connected(&self) -> Vec<ConnectedPlatform> {
        let mut connections: Vec<ConnectedPlatform> =
            self.connections.iter().map(|r| r.value().clone()).collect();
        connections.sort_by(|a, b| b.connected_at.cmp(&a.connected_at));
        connections
    }

    /// Link an account. The credentials document is accepted opaquely; real
    /// connectors would exchange it for tokens here.
    pub fn connect(&self, platform: &str, _credentials: &serde_json::Value) -> ConnectedPlatform {
        let now = Utc::now();
        let display = capitalize(platform);
        let connection = ConnectedPlatform {
            id: format!("{platform}_{}", now.timestamp_millis()),
            platform: platform.to_string(),
            name: format!("{display} Ads"),
            status: ConnectionStatus::Connected,
            connected_at: now,
            account_name: format!("My {display} Account"),
            account_id: format!("acc_{}", now.timestamp_millis()),
            last_sync: now,
            spend: 0.0,
            campaigns: 0,
        };
        self.connections
            .insert(connection.id.clone(), connection.clone());
        info!(platform = %platform, id = %connection.id, "Platform connected");
        connection
    }

    pub fn disconnect(&self, platform_id: &str) -> bool {
        let removed = self.connections.remove(platform_id).is_some();
        if removed {
            info!(id = %platform_id, "Platform disconnected");
        }
        removed
    }

    /// Refresh a connection's sync marker and report simulated pull volumes.
    pub fn sync(&self, platform_id: &str) -> Option<SyncResult> {
        self.connections.get_mut(platform_id).map(|mut entry| {
            let now = Utc::now();
            entry.value_mut().last_sync = now;
            let mut rng = rand::thread_rng();
            SyncResult {
                last_sync: now,
                campaigns_synced: rng.gen_range(1..11),
                data_points: rng.gen_range(100..1100),
            }
        })
    }

    fn seed_demo_connections(&self) {
        let seeds = [
            (
                "fb_001",
                "facebook",
                "Facebook Ads",
                "My Business Page",
                "123456789",
                Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 20, 15, 45, 0).unwrap(),
                12500.0,
                3u32,
            ),
            (
                "google_001",
                "google",
                "Google Ads",
                "My Google Ads Account",
                "987654321",
                Utc.with_ymd_and_hms(2024, 1, 10, 9, 15, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 20, 14, 30, 0).unwrap(),
                8900.0,
                2,
            ),
            (
                "tiktok_001",
                "tiktok",
                "TikTok Ads",
                "My TikTok Business",
                "456789123",
                Utc.with_ymd_and_hms(2024, 1, 5, 11, 20, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 20, 16, 0, 0).unwrap(),
                7490.0,
                1,
            ),
        ];

        for (id, platform, name, account_name, account_id, connected_at, last_sync, spend, campaigns) in
            seeds
        {
            self.connections.insert(
                id.to_string(),
                ConnectedPlatform {
                    id: id.to_string(),
                    platform: platform.to_string(),
                    name: name.to_string(),
                    status: ConnectionStatus::Connected,
                    connected_at,
                    account_name: account_name.to_string(),
                    account_id: account_id.to_string(),
                    last_sync,
                    spend,
                    campaigns,
                },
            );
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The static catalog of linkable platforms.
pub fn available_platforms() -> Vec<AvailablePlatform> {
    vec![
        AvailablePlatform {
            id: "facebook".into(),
            name: "Facebook Ads".into(),
            description: "Connect your Facebook Ads account to track performance".into(),
            icon: "facebook".into(),
            status: ConnectionStatus::Available,
            features: vec![
                "Campaign tracking".into(),
                "Audience insights".into(),
                "Creative analytics".into(),
            ],
        },
        AvailablePlatform {
            id: "google".into(),
            name: "Google Ads".into(),
            description: "Connect your Google Ads account for comprehensive analytics".into(),
            icon: "google".into(),
            status: ConnectionStatus::Available,
            features: vec![
                "Search campaigns".into(),
                "Display campaigns".into(),
                "Shopping ads".into(),
            ],
        },
        AvailablePlatform {
            id: "tiktok".into(),
            name: "TikTok Ads".into(),
            description: "Track your TikTok advertising performance".into(),
            icon: "tiktok".into(),
            status: ConnectionStatus::Available,
            features: vec![
                "Video campaigns".into(),
                "Brand awareness".into(),
                "Engagement tracking".into(),
            ],
        },
        AvailablePlatform {
            id: "instagram".into(),
            name: "Instagram Ads".into(),
            description: "Monitor your Instagram advertising campaigns".into(),
            icon: "instagram".into(),
            status: ConnectionStatus::ComingSoon,
            features: vec!["Story ads".into(), "Feed ads".into(), "IGTV campaigns".into()],
        },
        AvailablePlatform {
            id: "linkedin".into(),
            name: "LinkedIn Ads".into(),
            description: "Track B2B advertising performance on LinkedIn".into(),
            icon: "linkedin".into(),
            status: ConnectionStatus::ComingSoon,
            features: vec![
                "Sponsored content".into(),
                "Message ads".into(),
                "Dynamic ads".into(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_connections_sorted_newest_first() {
        let registry = PlatformRegistry::new();
        let connected = registry.list_connected();
        assert_eq!(connected.len(), 3);
        assert_eq!(connected[0].id, "fb_001");
        assert_eq!(connected[2].id, "tiktok_001");
    }

    #[test]
    fn test_connect_sync_disconnect_lifecycle() {
        let registry = PlatformRegistry::new();
        let connection = registry.connect("snapchat", &serde_json::json!({"token": "t"}));
        assert!(connection.id.starts_with("snapchat_"));
        assert_eq!(connection.spend, 0.0);
        assert_eq!(registry.list_connected().len(), 4);

        let sync = registry.sync(&connection.id).unwrap();
        assert!((1..11).contains(&sync.campaigns_synced));
        assert!((100..1100).contains(&sync.data_points));

        assert!(registry.disconnect(&connection.id));
        assert!(!registry.disconnect(&connection.id));
        assert_eq!(registry.list_connected().len(), 3);
    }

    #[test]
    fn test_sync_unknown_id() {
        let registry = PlatformRegistry::new();
        assert!(registry.sync("nope_001").is_none());
    }

    #[test]
    fn test_catalog_statuses() {
        let catalog = available_platforms();
        assert_eq!(catalog.len(), 5);
        let coming: Vec<_> = catalog
            .iter()
            .filter(|p| p.status == ConnectionStatus::ComingSoon)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(coming, vec!["instagram", "linkedin"]);
    }
}
