//! Runtime configuration for the collector.
//!
//! Pure domain types with no infrastructure dependencies; the CLI maps its
//! flags onto [`Settings`] 1:1.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default port for the web viewer.
pub const DEFAULT_WEB_PORT: u16 = 8000;

/// Default syslog ingestion port. Binding it usually needs elevated
/// privileges; pick a port above 1024 otherwise.
pub const DEFAULT_SYSLOG_PORT: u16 = 514;

/// Default bind host for both the viewer and the listeners.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default capacity of the in-memory store.
pub const DEFAULT_MAX_LOGS: usize = 2000;

/// Default bound on trailing lines parsed per file during a snapshot read.
pub const DEFAULT_FILE_READ_LIMIT: usize = 1000;

/// Collector settings.
///
/// All fields are optional to support partial configuration with graceful
/// defaults; use the `effective_*` accessors to read resolved values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Host the web viewer binds to.
    pub web_host: Option<String>,

    /// Port the web viewer binds to.
    pub web_port: Option<u16>,

    /// Host the syslog listeners bind to.
    pub syslog_host: Option<String>,

    /// UDP ports to listen on, one listener per port.
    pub syslog_ports: Option<Vec<u16>>,

    /// Capacity of the in-memory store (ignored when `log_dir` is set).
    pub max_logs: Option<usize>,

    /// Directory for per-port log files; presence selects the file-backed
    /// store over the in-memory one.
    pub log_dir: Option<PathBuf>,

    /// Trailing lines parsed per file when reading logs back.
    pub file_read_limit: Option<usize>,
}

impl Settings {
    /// Effective web bind host (with default fallback).
    #[must_use]
    pub fn effective_web_host(&self) -> &str {
        self.web_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Effective web port (with default fallback).
    #[must_use]
    pub fn effective_web_port(&self) -> u16 {
        self.web_port.unwrap_or(DEFAULT_WEB_PORT)
    }

    /// Effective syslog bind host (with default fallback).
    #[must_use]
    pub fn effective_syslog_host(&self) -> &str {
        self.syslog_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Effective syslog port list (with default fallback).
    #[must_use]
    pub fn effective_syslog_ports(&self) -> Vec<u16> {
        self.syslog_ports
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_SYSLOG_PORT])
    }

    /// Effective in-memory capacity (with default fallback).
    #[must_use]
    pub fn effective_max_logs(&self) -> usize {
        self.max_logs.unwrap_or(DEFAULT_MAX_LOGS)
    }

    /// Effective per-file read bound (with default fallback).
    #[must_use]
    pub fn effective_file_read_limit(&self) -> usize {
        self.file_read_limit.unwrap_or(DEFAULT_FILE_READ_LIMIT)
    }
}

/// Validation failures for user-supplied settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// An explicitly empty port list would leave nothing to ingest.
    #[error("at least one syslog port is required")]
    NoSyslogPorts,

    /// A zero-capacity buffer could never hold a record.
    #[error("max_logs must be at least 1")]
    ZeroCapacity,

    /// A zero read bound would make every snapshot empty.
    #[error("file_read_limit must be at least 1")]
    ZeroReadLimit,
}

/// Validate user-supplied settings before anything binds or writes.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if matches!(&settings.syslog_ports, Some(ports) if ports.is_empty()) {
        return Err(SettingsError::NoSyslogPorts);
    }
    if settings.max_logs == Some(0) {
        return Err(SettingsError::ZeroCapacity);
    }
    if settings.file_read_limit == Some(0) {
        return Err(SettingsError::ZeroReadLimit);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_through_effective_accessors() {
        let settings = Settings::default();
        assert_eq!(settings.effective_web_host(), DEFAULT_BIND_HOST);
        assert_eq!(settings.effective_web_port(), DEFAULT_WEB_PORT);
        assert_eq!(settings.effective_syslog_ports(), vec![DEFAULT_SYSLOG_PORT]);
        assert_eq!(settings.effective_max_logs(), DEFAULT_MAX_LOGS);
        assert_eq!(settings.effective_file_read_limit(), DEFAULT_FILE_READ_LIMIT);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let settings = Settings {
            web_port: Some(9090),
            syslog_ports: Some(vec![1514, 2514]),
            ..Settings::default()
        };
        assert_eq!(settings.effective_web_port(), 9090);
        assert_eq!(settings.effective_syslog_ports(), vec![1514, 2514]);
    }

    #[test]
    fn empty_port_list_is_rejected() {
        let settings = Settings {
            syslog_ports: Some(vec![]),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::NoSyslogPorts)
        );
    }

    #[test]
    fn zero_bounds_are_rejected() {
        let zero_cap = Settings {
            max_logs: Some(0),
            ..Settings::default()
        };
        assert_eq!(validate_settings(&zero_cap), Err(SettingsError::ZeroCapacity));

        let zero_limit = Settings {
            file_read_limit: Some(0),
            ..Settings::default()
        };
        assert_eq!(
            validate_settings(&zero_limit),
            Err(SettingsError::ZeroReadLimit)
        );
    }
}
