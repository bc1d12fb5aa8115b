use dotenvy::dotenv;

use cataas_app::config::app_config::AppConfig;
use cataas_app::setup::{dependency_injection::DependencyContainer, screens::Screens};

/// Application Entry Point
///
/// Initializes logging and configuration, wires dependencies once, and runs
/// the list and detail screens.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();
    tracing::info!(base_url = %config.network.base_url, limit = config.page_limit, "Starting");

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.network)?;

    // 5. Run screens
    Screens::run(config, container).await?;

    Ok(())
}
