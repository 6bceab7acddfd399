//! HTTP handlers for the viewer page and the log snapshot.

use axum::Json;
use axum::extract::State;
use axum::response::Html;

use udplog_core::LogRecord;

use crate::state::AppState;

/// Viewer page, compiled into the binary so the server is a single artifact.
const VIEWER_HTML: &str = include_str!("../assets/viewer.html");

/// Serve the static viewer page.
///
/// The same document is returned regardless of query parameters; all
/// filtering happens client-side.
pub async fn viewer() -> Html<&'static str> {
    Html(VIEWER_HTML)
}

/// Serve the store's current snapshot as a JSON array.
///
/// Records arrive in the store's natural order: insertion order for the
/// in-memory store, timestamp-descending for the file-backed one. No
/// server-side pagination or filtering.
pub async fn logs(State(store): State<AppState>) -> Json<Vec<LogRecord>> {
    Json(store.snapshot().await)
}
