//! Storage trait for the message log.

use async_trait::async_trait;
use thiserror::Error;

use crate::MessageEntry;

/// Storage error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage error: {0}")]
    Internal(String),
}

/// Trait for message log backends.
///
/// Entries are kept in insertion order. Implementations only need to be
/// consistent with themselves; callers that need the count and the latest
/// append to agree serialize their writes.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Append an entry to the end of the log.
    async fn append(&self, entry: MessageEntry) -> Result<(), StorageError>;

    /// Return up to `limit` most recent entries, oldest first.
    async fn list_recent(&self, limit: usize) -> Result<Vec<MessageEntry>, StorageError>;

    /// Total number of entries ever appended.
    async fn count(&self) -> Result<usize, StorageError>;
}
