// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::embed_token_service::EmbedTokenService;
use crate::infrastructure::config::{FileConfigStore, ServerSettings};
use crate::infrastructure::upstream_client::ReqwestUpstream;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = ServerSettings::default();

    // Config is re-read from disk on every request
    let config_store = Arc::new(FileConfigStore::new(settings.config_path.clone()));
    let upstream = Arc::new(ReqwestUpstream::new(reqwest::Client::new()));

    let state = Arc::new(AppState {
        embed_token_service: EmbedTokenService::new(config_store, upstream),
    });

    let router = build_router(state);

    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server starting on port {}...", settings.port);

    axum::serve(listener, router).await?;

    Ok(())
}
