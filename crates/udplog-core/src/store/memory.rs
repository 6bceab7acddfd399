//! Bounded in-memory store with FIFO eviction.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::LogStore;
use crate::record::LogRecord;

/// Ordered in-memory buffer holding at most `max_logs` records.
///
/// One mutex guards every read and write. The critical sections are
/// append-and-maybe-evict and copy-out only; serialization happens outside
/// the lock.
pub struct MemoryStore {
    max_logs: usize,
    logs: Mutex<VecDeque<LogRecord>>,
}

impl MemoryStore {
    /// Create an empty buffer capped at `max_logs` records.
    #[must_use]
    pub fn new(max_logs: usize) -> Self {
        Self {
            max_logs,
            logs: Mutex::new(VecDeque::new()),
        }
    }
}

#[async_trait]
impl LogStore for MemoryStore {
    async fn append(&self, record: LogRecord) {
        let mut logs = self.logs.lock().await;
        logs.push_back(record);
        while logs.len() > self.max_logs {
            logs.pop_front();
        }
    }

    async fn snapshot(&self) -> Vec<LogRecord> {
        let logs = self.logs.lock().await;
        logs.iter().cloned().collect()
    }
}
