//! Command-line definition for the collector binary.

use std::path::PathBuf;

use clap::Parser;

use udplog_core::Settings;

/// UDP syslog collector with a built-in web viewer.
#[derive(Debug, Parser)]
#[command(name = "udplog")]
#[command(about = "Collect UDP syslog messages and browse them in a web viewer")]
#[command(version)]
pub struct Cli {
    /// Host the web viewer binds to [default: 0.0.0.0]
    #[arg(long, env = "UDPLOG_WEB_HOST")]
    pub web_host: Option<String>,

    /// Port the web viewer binds to [default: 8000]
    #[arg(long, env = "UDPLOG_WEB_PORT")]
    pub web_port: Option<u16>,

    /// Host the syslog listeners bind to [default: 0.0.0.0]
    #[arg(long, env = "UDPLOG_SYSLOG_HOST")]
    pub syslog_host: Option<String>,

    /// Syslog UDP port; repeat the flag for multiple listeners [default: 514]
    #[arg(long = "syslog-port", env = "UDPLOG_SYSLOG_PORTS", value_delimiter = ',')]
    pub syslog_ports: Vec<u16>,

    /// In-memory buffer capacity [default: 2000]
    #[arg(long, env = "UDPLOG_MAX_LOGS")]
    pub max_logs: Option<usize>,

    /// Append per-port JSON-lines files under this directory instead of
    /// keeping logs in memory
    #[arg(long, env = "UDPLOG_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Trailing lines parsed per file when reading logs back [default: 1000]
    #[arg(long, env = "UDPLOG_FILE_READ_LIMIT")]
    pub file_read_limit: Option<usize>,
}

impl Cli {
    /// Fold the parsed flags into the core settings type.
    ///
    /// An absent flag stays `None` so the settings defaults apply; an empty
    /// port list likewise means "use the default port", since clap yields an
    /// empty `Vec` when the flag never appears.
    #[must_use]
    pub fn into_settings(self) -> Settings {
        Settings {
            web_host: self.web_host,
            web_port: self.web_port,
            syslog_host: self.syslog_host,
            syslog_ports: if self.syslog_ports.is_empty() {
                None
            } else {
                Some(self.syslog_ports)
            },
            max_logs: self.max_logs,
            log_dir: self.log_dir,
            file_read_limit: self.file_read_limit,
        }
    }
}
