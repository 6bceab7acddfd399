//! Collector entry point - the composition root.
//!
//! This is the only place where infrastructure is wired together: the store
//! is built once, injected into every listener, and handed to the web
//! server. A listener that fails to bind is reported and skipped; the rest
//! of the process keeps going.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use udplog_axum::{ServerConfig, start_server};
use udplog_cli::Cli;
use udplog_core::{
    FileStore, LogStore, MemoryStore, SyslogListener, ensure_directory, validate_settings,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = Cli::parse().into_settings();
    validate_settings(&settings)?;

    let store: Arc<dyn LogStore> = match settings.log_dir.clone() {
        Some(dir) => {
            ensure_directory(&dir)?;
            info!("appending per-port log files under {}", dir.display());
            Arc::new(FileStore::new(dir, settings.effective_file_read_limit()))
        }
        None => {
            info!(
                "keeping up to {} logs in memory",
                settings.effective_max_logs()
            );
            Arc::new(MemoryStore::new(settings.effective_max_logs()))
        }
    };

    let syslog_host = settings.effective_syslog_host().to_string();
    let mut bound = 0usize;
    for port in settings.effective_syslog_ports() {
        match SyslogListener::bind(&syslog_host, port, Arc::clone(&store)).await {
            Ok(listener) => {
                tokio::spawn(listener.run());
                bound += 1;
            }
            Err(err) if err.is_permission_denied() => {
                error!("{err}; run with elevated privileges or pick a port above 1024");
            }
            Err(err) => {
                error!("{err}; listener skipped");
            }
        }
    }
    if bound == 0 {
        warn!("no syslog listener could be bound; the viewer will stay empty");
    }

    let config = ServerConfig {
        host: settings.effective_web_host().to_string(),
        port: settings.effective_web_port(),
    };
    start_server(config, store).await
}
