//! Cross-platform campaign listing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

/// A campaign row as rendered by the dashboard; ratio fields keep the
/// platform APIs' snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub status: CampaignStatus,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpc: f64,
    pub conversion_rate: f64,
}

/// Campaign listing with headline counts, spend-descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignReport {
    pub campaigns: Vec<Campaign>,
    pub total_campaigns: usize,
    pub active_campaigns: usize,
    pub total_spend: f64,
}

pub(crate) fn fixture_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "camp_001".into(),
            name: "Summer Sale Campaign".into(),
            platform: "facebook".into(),
            status: CampaignStatus::Active,
            spend: 8500.0,
            impressions: 400_000,
            clicks: 4800,
            conversions: 192,
            ctr: 1.2,
            cpc: 1.77,
            conversion_rate: 4.0,
        },
        Campaign {
            id: "camp_002".into(),
            name: "Brand Awareness".into(),
            platform: "google".into(),
            status: CampaignStatus::Active,
            spend: 6200.0,
            impressions: 300_000,
            clicks: 3200,
            conversions: 128,
            ctr: 1.07,
            cpc: 1.94,
            conversion_rate: 4.0,
        },
        Campaign {
            id: "camp_003".into(),
            name: "Product Launch".into(),
            platform: "tiktok".into(),
            status: CampaignStatus::Active,
            spend: 7490.0,
            impressions: 200_000,
            clicks: 2500,
            conversions: 100,
            ctr: 1.25,
            cpc: 3.0,
            conversion_rate: 4.0,
        },
    ]
}

pub fn campaign_report() -> CampaignReport {
    let mut campaigns = fixture_campaigns();
    campaigns.sort_by(|a, b| b.spend.total_cmp(&a.spend));

    let total_campaigns = campaigns.len();
    let active_campaigns = campaigns
        .iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .count();

    CampaignReport {
        campaigns,
        total_campaigns,
        active_campaigns,
        total_spend: 28890.0,
    }
}
