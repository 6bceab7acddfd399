//! Route definitions and router construction.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the router: the viewer page at `/`, the JSON snapshot at `/logs`.
///
/// Unmatched paths fall through to axum's default fallback, a `404` with an
/// empty body.
pub fn create_router(store: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::viewer))
        .route("/logs", get(handlers::logs))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
