//! Alert inbox and threshold settings.
//!
//! Store-only: the monitoring daemon that would feed this inbox from live
//! metric streams is an external collaborator. Production: persist alerts
//! and fan out notifications.

pub mod store;

pub use store::{
    Alert, AlertSettings, AlertSettingsUpdate, AlertStore, BudgetAlertConfig, CreateAlert,
    CustomAlertRule, PerformanceAlertConfig, Severity,
};
