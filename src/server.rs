//! HTTP server initialization and runtime setup.
//!
//! Handles provider and cache setup and the Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::infrastructure::tmdb::TmdbClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - TMDB client (with the optional upstream timeout)
/// - Trailer cache (or NullCache when disabled)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - The TMDB client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let provider = TmdbClient::new(
        config.tmdb_api_key.clone(),
        &config.tmdb_base_url,
        config.upstream_timeout(),
    )
    .context("Failed to create TMDB client")?;
    tracing::info!("TMDB client ready");

    let cache: Arc<dyn CacheService> = if config.cache_enabled {
        tracing::info!("Cache enabled (memory, TTL: {}s)", config.cache_ttl_seconds);
        Arc::new(MemoryCache::new())
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let state = AppState::new(Arc::new(provider), cache, config.cache_ttl());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("TMDB Trailer Addon running at http://{addr}");
    tracing::info!("Manifest: http://localhost:{}/manifest.json", addr.port());

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
