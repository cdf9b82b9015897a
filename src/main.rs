//! erp-dashboard binary
//!
//! Usage: `erp-dashboard [config.yaml]`. Without a file the built-in demo
//! configuration is used.

use anyhow::Result;
use erp::config::DashboardConfig;
use erp::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("erp=info,erp_dashboard=info,tower_http=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "loading configuration");
            DashboardConfig::from_yaml_file(&path)?
        }
        None => {
            tracing::info!("no configuration file given, using demo accounts");
            DashboardConfig::default_config()
        }
    };

    ServerBuilder::new()
        .with_config(config)
        .serve()
        .await
}
