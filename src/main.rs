use std::sync::Arc;
use std::time::Duration;

use aisle::{
    api::{create_router, AppState},
    config::Config,
    services::{catalog, providers::RestStoreProvider},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(RestStoreProvider::new(
        config.feed_api_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?);

    let state = AppState::new(provider.clone());

    // The process starts with an empty catalog if the feed is unreachable;
    // clients can reload later.
    match catalog::load_catalog(provider).await {
        Ok(products) => {
            state.session.write().await.catalog = products;
        }
        Err(e) => {
            tracing::warn!(error = %e, "Initial catalog load failed, starting empty");
        }
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
