//! Connected ad-platform registry.
//!
//! In-memory store for the accounts a workspace has linked, plus the static
//! catalog of platforms that can be linked. Production: replace the DashMap
//! with the OAuth connection vault.

pub mod registry;

pub use registry::{
    available_platforms, AvailablePlatform, ConnectedPlatform, ConnectionStatus, PlatformRegistry,
    SyncResult,
};
