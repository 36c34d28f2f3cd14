//! HTTP server entry point

use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;
use anyhow::{Context, Result};

/// Open the database, bind the listener and serve until Ctrl-C
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::open(&config.db_path).await?;
    let app = create_router(state, config.cors_origins.as_deref());

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    tracing::info!("Server is running on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
