//! Web server bootstrap.
//!
//! The composition root hands the fully-constructed store in; this module
//! only binds the TCP listener and serves the router.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use udplog_core::{DEFAULT_BIND_HOST, DEFAULT_WEB_PORT, LogStore};

/// Bind configuration for the web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host the viewer binds to.
    pub host: String,
    /// Port the viewer binds to.
    pub port: u16,
}

impl ServerConfig {
    /// Create config with default bind values.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_WEB_PORT,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Bind the web port and serve until the process exits.
///
/// A bind failure is returned to the caller and ends the server; already
/// running ingestion listeners are not affected by it.
pub async fn start_server(config: ServerConfig, store: Arc<dyn LogStore>) -> Result<()> {
    let app = crate::routes::create_router(store);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind web server on {addr}"))?;
    info!("web viewer available at http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
