//! HTTP proxy exposing normalized weather reports.
//!
//! Route wiring only; all fetching, caching, and fallback logic lives in
//! `ozweather-core`.

use std::sync::Arc;

use anyhow::Context;
use ozweather_core::{Config, WeatherService};
use ozweather_server::api;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let service = Arc::new(WeatherService::new(&config));
    let router = api::create_router(service);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("ozweather server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
