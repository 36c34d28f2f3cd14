//! Serve command implementation

use anyhow::Result;
use books_server::ServerConfig;

/// Run the HTTP server until interrupted
pub async fn serve(config: ServerConfig) -> Result<()> {
    tracing::debug!("Server configuration: {:?}", config);
    books_server::serve(config).await
}
