//! Workspace settings, subscription view, billing stubs, and API keys.
//!
//! Billing is presentation-only here: amounts and invoices are fixtures.
//! Production wires this to the payment provider.

pub mod api_keys;
pub mod billing;
pub mod document;
pub mod subscription;

pub use api_keys::{ApiKey, ApiKeyStore, CreateApiKey};
pub use billing::{billing_info, BillingInfo, Invoice, PaymentMethod};
pub use document::{SettingsDocument, SettingsStore, SettingsUpdate};
pub use subscription::{subscription_view, Plan, PlanLimit, SubscriptionView};
