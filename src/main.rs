use std::sync::Arc;

use omdb_gateway::{
    config::Config,
    routes::{create_router, AppState},
    services::{CandidatePool, OmdbProvider},
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

    let provider = OmdbProvider::new(config.omdb_api_key.clone(), config.omdb_api_url.clone());
    let state = AppState::new(Arc::new(provider), CandidatePool::default());
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, upstream = %config.omdb_api_url, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
