//! The core record type: one decoded syslog message plus capture metadata.

use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ingested syslog message.
///
/// A record is created exactly once, when a datagram decodes successfully,
/// and is never mutated afterwards. The timestamp is the ingestion instant,
/// not a time parsed out of the message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Ingestion instant, second resolution on the wire.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    /// Originating IP address.
    pub source: String,
    /// Originating UDP port.
    pub source_port: u16,
    /// The listener port that received the datagram.
    pub destination_port: u16,
    /// Decoded payload, leading/trailing whitespace trimmed.
    pub message: String,
}

impl LogRecord {
    /// Build a record stamped with the current time.
    ///
    /// Stamping lives here so every listener produces identically-shaped
    /// records regardless of which store they feed.
    #[must_use]
    pub fn ingested(message: String, peer: SocketAddr, destination_port: u16) -> Self {
        Self {
            timestamp: Utc::now(),
            source: peer.ip().to_string(),
            source_port: peer.port(),
            destination_port,
            message,
        }
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps.
///
/// Second resolution, no offset. Lexicographic order of the serialized form
/// equals chronological order, which the file store's read-time sort relies
/// on.
pub mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
