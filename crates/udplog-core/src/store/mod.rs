//! Log storage: the shared read/write contract plus the two store strategies.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::record::LogRecord;

/// Read/write contract shared by both store strategies.
///
/// `append` never surfaces an error to the listener: a storage failure is
/// diagnosed via tracing and the record dropped. `snapshot` is a
/// point-in-time copy of the current record set in the store's natural read
/// order - insertion order for [`MemoryStore`], timestamp-descending for
/// [`FileStore`].
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Persist one record, best effort.
    async fn append(&self, record: LogRecord);

    /// Copy out the current record set for serialization.
    async fn snapshot(&self) -> Vec<LogRecord>;
}
