//! Shared application state type.

use std::sync::Arc;

use udplog_core::LogStore;

/// State shared across all handlers: the injected log store.
///
/// Constructed once in the composition root and cloned per request; there
/// is no ambient global buffer anywhere in the crate.
pub type AppState = Arc<dyn LogStore>;
