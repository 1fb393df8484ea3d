use dotenvy::dotenv;
use tracing::info;

mod api;
mod config;
mod observers;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Storefront service entry point
///
/// - config/: environment-driven settings (server, CORS, catalog API, storage, language)
/// - setup/: dependency wiring and the HTTP server
/// - api/: route handlers and DTOs
/// - observers/: cart badge and toast notifications fed by cart changes
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
    info!(
        "Catalog API at {} (media {}), cart stored in {}",
        config.api.base_url,
        config.api.media_url,
        config.storage.dir.display()
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config).await?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
