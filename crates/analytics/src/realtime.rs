//! Simulated realtime counters. Values are sampled fresh per request within
//! the demo ranges; only `last_updated` is a real observation.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeSnapshot {
    pub active_campaigns: u32,
    pub today_spend: u32,
    pub today_clicks: u32,
    pub today_conversions: u32,
    pub last_updated: DateTime<Utc>,
}

pub fn realtime_snapshot() -> RealtimeSnapshot {
    let mut rng = rand::thread_rng();
    RealtimeSnapshot {
        active_campaigns: rng.gen_range(5..15),
        today_spend: rng.gen_range(200..1200),
        today_clicks: rng.gen_range(100..600),
        today_conversions: rng.gen_range(5..25),
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_in_demo_ranges() {
        for _ in 0..50 {
            let s = realtime_snapshot();
            assert!((5..15).contains(&s.active_campaigns));
            assert!((200..1200).contains(&s.today_spend));
            assert!((100..600).contains(&s.today_clicks));
            assert!((5..25).contains(&s.today_conversions));
        }
    }
}
