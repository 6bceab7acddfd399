//! Core domain for udplog: records, payload decoding, log stores, the UDP
//! listener, and configuration. No HTTP types live here; the web adapter
//! depends on this crate, never the other way around.

#![deny(unused_crate_dependencies)]

pub mod decode;
pub mod listener;
pub mod paths;
pub mod record;
pub mod settings;
pub mod store;

// Re-export commonly used types for convenience
pub use decode::{DEFAULT_ENCODINGS, decode_payload};
pub use listener::{ListenerError, SyslogListener};
pub use paths::{PathError, ensure_directory, verify_writable};
pub use record::LogRecord;
pub use settings::{
    DEFAULT_BIND_HOST, DEFAULT_FILE_READ_LIMIT, DEFAULT_MAX_LOGS, DEFAULT_SYSLOG_PORT,
    DEFAULT_WEB_PORT, Settings, SettingsError, validate_settings,
};
pub use store::{FileStore, LogStore, MemoryStore};
