//! Axum web adapter for udplog.
//!
//! Serves exactly two routes: the embedded viewer page at `/` and the log
//! snapshot at `/logs`. Everything else falls through to a 404 with an
//! empty body. Handlers are infallible by design - the snapshot endpoint
//! returns best-effort data and clients never see a 5xx.

#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the integration test suite
#[cfg(test)]
use chrono as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{ServerConfig, start_server};
pub use routes::create_router;
pub use state::AppState;
