//! Billing presentation stubs — fixture invoices and payment method.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub method_type: String,
    pub last4: String,
    pub brand: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub date: DateTime<Utc>,
    pub amount: f64,
    pub status: String,
    pub download_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInfo {
    pub current_plan: String,
    pub next_billing_date: DateTime<Utc>,
    pub amount: f64,
    pub currency: String,
    pub billing_cycle: String,
    pub payment_method: PaymentMethod,
    pub invoices: Vec<Invoice>,
}

pub fn billing_info() -> BillingInfo {
    BillingInfo {
        current_plan: "basic".into(),
        next_billing_date: Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap(),
        amount: 29.99,
        currency: "USD".into(),
        billing_cycle: "monthly".into(),
        payment_method: PaymentMethod {
            method_type: "card".into(),
            last4: "4242".into(),
            brand: "visa".into(),
            expiry_month: 12,
            expiry_year: 2025,
        },
        invoices: vec![
            Invoice {
                id: "inv_001".into(),
                date: Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap(),
                amount: 29.99,
                status: "paid".into(),
                download_url: "/api/settings/billing/invoice/inv_001".into(),
            },
            Invoice {
                id: "inv_002".into(),
                date: Utc.with_ymd_and_hms(2023, 12, 20, 0, 0, 0).unwrap(),
                amount: 29.99,
                status: "paid".into(),
                download_url: "/api/settings/billing/invoice/inv_002".into(),
            },
        ],
    }
}
