use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use activity_advisor::adapters::catalog::JsonFileCatalogSource;
use activity_advisor::adapters::http::{app_router, DialogHandlers};
use activity_advisor::application::build_engine;
use activity_advisor::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let source = JsonFileCatalogSource::new(&config.catalog.path);
    let engine = build_engine(&config, &source).await?;
    let handlers = DialogHandlers::from_engine(Arc::new(engine));
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "activity advisor listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Logs as JSON in production, human-readable otherwise. `RUST_LOG` wins
/// over the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
