//! Append-only per-port JSON-lines store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::warn;

use super::LogStore;
use crate::record::LogRecord;

/// Store that appends one JSON record per line into `<port>.log` files.
///
/// Each listener port owns a distinct file, so appends need no cross-task
/// lock. Files grow without bound; the reader parses at most `read_limit`
/// trailing lines per file.
pub struct FileStore {
    log_dir: PathBuf,
    read_limit: usize,
}

impl FileStore {
    /// Create a store rooted at `log_dir`.
    ///
    /// The directory is expected to exist; the composition root ensures it
    /// before any listener starts (see [`crate::paths::ensure_directory`]).
    #[must_use]
    pub fn new(log_dir: impl Into<PathBuf>, read_limit: usize) -> Self {
        Self {
            log_dir: log_dir.into(),
            read_limit,
        }
    }

    fn file_for_port(&self, port: u16) -> PathBuf {
        self.log_dir.join(format!("{port}.log"))
    }

    /// Parse the trailing `read_limit` lines of one log file.
    ///
    /// A malformed line or an unreadable file yields a diagnostic and is
    /// skipped; it never aborts the read of the remaining files.
    async fn read_file(&self, path: &Path) -> Vec<LogRecord> {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(err) => {
                warn!("skipping unreadable log file {}: {err}", path.display());
                return Vec::new();
            }
        };

        let lines: Vec<&str> = contents.lines().collect();
        let start = lines.len().saturating_sub(self.read_limit);
        let mut records = Vec::with_capacity(lines.len() - start);
        for line in &lines[start..] {
            match serde_json::from_str::<LogRecord>(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!("skipping malformed record in {}: {err}", path.display());
                }
            }
        }
        records
    }
}

#[async_trait]
impl LogStore for FileStore {
    async fn append(&self, record: LogRecord) {
        let path = self.file_for_port(record.destination_port);
        let mut line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(err) => {
                warn!("dropping unserializable record: {err}");
                return;
            }
        };
        line.push('\n');

        let written = async {
            let mut file = OpenOptions::new()
                .append(true)
                .create(true)
                .open(&path)
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.flush().await
        }
        .await;

        if let Err(err) = written {
            warn!("dropping record, append to {} failed: {err}", path.display());
        }
    }

    async fn snapshot(&self) -> Vec<LogRecord> {
        let mut entries = match fs::read_dir(&self.log_dir).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    "cannot read log directory {}: {err}",
                    self.log_dir.display()
                );
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let path = entry.path();
                    if path.extension().and_then(|ext| ext.to_str()) == Some("log") {
                        records.extend(self.read_file(&path).await);
                    }
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("stopping log directory scan early: {err}");
                    break;
                }
            }
        }

        // Newest first. The sort is stable, so records sharing a
        // second-resolution timestamp keep directory encounter order, which
        // is arbitrary.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        records
    }
}
