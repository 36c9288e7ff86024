//! API-key registry. Keys are opaque development values; production issues
//! and stores them hashed.

use chrono::{DateTime, TimeZone, Utc};
use dashmap::DashMap;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub id: String,
    pub name: String,
    pub key: String,
    pub created: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
    pub permissions: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateApiKey {
    pub name: String,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// In-memory key registry, seeded with the demo keys.
pub struct ApiKeyStore {
    keys: DashMap<String, ApiKey>,
}

impl Default for ApiKeyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyStore {
    pub fn new() -> Self {
        let store = Self {
            keys: DashMap::new(),
        };
        store.seed_demo_keys();
        store
    }

    /// All keys, oldest first.
    pub fn list(&self) -> Vec<ApiKey> {
        let mut keys: Vec<ApiKey> = self.keys.iter().map(|r| r.value().clone()).collect();
        keys.sort_by(|a, b| a.created.cmp(&b.created));
        keys
    }

    pub fn create(&self, req: CreateApiKey) -> ApiKey {
        let now = Utc::now();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(char::from)
            .collect();
        let key = ApiKey {
            id: format!("key_{}", now.timestamp_millis()),
            name: req.name,
            key: format!("sk_{}", suffix.to_lowercase()),
            created: now,
            last_used: None,
            permissions: req.permissions.unwrap_or_else(|| vec!["read".to_string()]),
            status: "active".to_string(),
        };
        self.keys.insert(key.id.clone(), key.clone());
        key
    }

    pub fn revoke(&self, key_id: &str) -> bool {
        self.keys.remove(key_id).is_some()
    }

    fn seed_demo_keys(&self) {
        let seeds = [
            ApiKey {
                id: "key_001".into(),
                name: "Production API Key".into(),
                key: "sk_live_...".into(),
                created: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
                last_used: Some(Utc.with_ymd_and_hms(2024, 1, 20, 15, 45, 0).unwrap()),
                permissions: vec!["read".into(), "write".into()],
                status: "active".into(),
            },
            ApiKey {
                id: "key_002".into(),
                name: "Development API Key".into(),
                key: "sk_test_...".into(),
                created: Utc.with_ymd_and_hms(2024, 1, 10, 9, 15, 0).unwrap(),
                last_used: Some(Utc.with_ymd_and_hms(2024, 1, 19, 14, 30, 0).unwrap()),
                permissions: vec!["read".into()],
                status: "active".into(),
            },
        ];
        for key in seeds {
            self.keys.insert(key.id.clone(), key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_keys_oldest_first() {
        let store = ApiKeyStore::new();
        let keys = store.list();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].id, "key_002");
    }

    #[test]
    fn test_create_defaults_to_read_permission() {
        let store = ApiKeyStore::new();
        let key = store.create(CreateApiKey {
            name: "CI Key".into(),
            permissions: None,
        });
        assert!(key.key.starts_with("sk_"));
        assert_eq!(key.permissions, vec!["read".to_string()]);
        assert!(key.last_used.is_none());
    }

    #[test]
    fn test_revoke_lifecycle() {
        let store = ApiKeyStore::new();
        let key = store.create(CreateApiKey {
            name: "Temp".into(),
            permissions: Some(vec!["read".into(), "write".into()]),
        });
        assert!(store.revoke(&key.id));
        assert!(!store.revoke(&key.id));
        assert_eq!(store.list().len(), 2);
    }
}
