//! UDP ingestion listener, one per configured syslog port.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use encoding_rs::Encoding;
use thiserror::Error;
use tokio::net::UdpSocket;
use tracing::{info, warn};

use crate::decode::{DEFAULT_ENCODINGS, decode_payload};
use crate::record::LogRecord;
use crate::store::LogStore;

/// Receive buffer size; UDP datagrams larger than this are truncated by the
/// kernel, and real syslog messages are far smaller.
const RECV_BUFFER_SIZE: usize = 64 * 1024;

/// Pause after a receive error so a persistent socket failure cannot spin.
const RECV_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Errors surfaced while constructing a listener.
///
/// Everything past `bind` is handled inside the receive loop and never
/// reaches the caller.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The requested host/port could not be bound.
    #[error("failed to bind UDP {host}:{port}: {source}")]
    Bind {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
}

impl ListenerError {
    /// True when the bind failed for lack of privilege, typically a port
    /// below 1024 on Unix.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        let Self::Bind { source, .. } = self;
        source.kind() == io::ErrorKind::PermissionDenied
    }
}

/// One UDP listener bound to a single port, feeding the shared store.
///
/// Listeners are independent: each owns its socket, and a failure to
/// construct one leaves the others untouched.
pub struct SyslogListener {
    socket: UdpSocket,
    port: u16,
    store: Arc<dyn LogStore>,
    encodings: &'static [&'static Encoding],
}

impl SyslogListener {
    /// Bind a listener on `host:port` with the default encoding chain.
    ///
    /// The port is an explicit parameter rather than captured state so
    /// callers binding a list of ports cannot accidentally share one.
    pub async fn bind(
        host: &str,
        port: u16,
        store: Arc<dyn LogStore>,
    ) -> Result<Self, ListenerError> {
        let bind_err = |source| ListenerError::Bind {
            host: host.to_string(),
            port,
            source,
        };
        let socket = UdpSocket::bind((host, port)).await.map_err(bind_err)?;
        // Resolve port 0 to the port the OS actually assigned.
        let port = socket.local_addr().map_err(bind_err)?.port();
        info!("syslog listener bound on {host}:{port}");

        Ok(Self {
            socket,
            port,
            store,
            encodings: DEFAULT_ENCODINGS,
        })
    }

    /// Replace the candidate encoding chain.
    #[must_use]
    pub fn with_encodings(mut self, encodings: &'static [&'static Encoding]) -> Self {
        self.encodings = encodings;
        self
    }

    /// The actually-bound port (meaningful after binding port 0).
    #[must_use]
    pub fn local_port(&self) -> u16 {
        self.port
    }

    /// Receive datagrams forever, appending each decodable payload.
    ///
    /// Never returns and never panics on malformed input; the task ends only
    /// when the process exits or the caller aborts it.
    pub async fn run(self) {
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];
        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, peer)) => self.ingest(&buf[..len], peer).await,
                Err(err) => {
                    warn!(port = self.port, "receive error: {err}");
                    tokio::time::sleep(RECV_ERROR_BACKOFF).await;
                }
            }
        }
    }

    async fn ingest(&self, raw: &[u8], peer: SocketAddr) {
        let Some(message) = decode_payload(raw, self.encodings) else {
            warn!(
                port = self.port,
                source = %peer.ip(),
                "dropping undecodable datagram ({} bytes)",
                raw.len()
            );
            return;
        };
        let record = LogRecord::ingested(message, peer, self.port);
        self.store.append(record).await;
    }
}
