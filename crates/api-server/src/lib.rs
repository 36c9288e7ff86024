#![warn(clippy::unwrap_used)]

pub mod ai_rest;
pub mod alert_rest;
pub mod analytics_rest;
pub mod envelope;
pub mod platform_rest;
pub mod server;
pub mod settings_rest;
pub mod state;

pub use server::ApiServer;
pub use state::AppState;
