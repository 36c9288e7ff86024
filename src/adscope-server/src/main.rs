//! AdScope — advertising-analytics dashboard backend.
//!
//! Main entry point: loads configuration, builds shared state, and starts
//! the HTTP and metrics servers.

use adscope_api::{ApiServer, AppState};
use adscope_core::config::AppConfig;
use clap::Parser;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "adscope-server")]
#[command(about = "Advertising-analytics dashboard backend")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "ADSCOPE__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "ADSCOPE__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Completion provider API key (overrides config)
    #[arg(long, env = "OPENAI_API_KEY")]
    completion_api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adscope=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("AdScope starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(key) = cli.completion_api_key {
        config.completion.api_key = Some(key);
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        completion_configured = config.completion.api_key.is_some(),
        "Configuration loaded"
    );

    if config.completion.api_key.is_none() {
        info!("No completion credential configured; AI reports will use the fallback generator");
    }

    let state = AppState::from_config(&config);
    let api_server = ApiServer::new(config, state);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("AdScope is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
