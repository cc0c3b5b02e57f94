//! In-memory message log.

use std::sync::RwLock;

use async_trait::async_trait;
use meeting_agent_core::{MessageEntry, MessageStore, StorageError};

/// In-memory storage implementation.
///
/// Useful for development and single-process deployments.
/// Data is lost on restart.
pub struct MemoryMessageStore {
    entries: RwLock<Vec<MessageEntry>>,
}

impl MemoryMessageStore {
    /// Create an empty in-memory log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn append(&self, entry: MessageEntry) -> Result<(), StorageError> {
        self.entries
            .write()
            .map_err(|e| StorageError::Internal(e.to_string()))?
            .push(entry);

        Ok(())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<MessageEntry>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::Internal(e.to_string()))?;

        let start = entries.len().saturating_sub(limit);
        Ok(entries[start..].to_vec())
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self
            .entries
            .read()
            .map_err(|e| StorageError::Internal(e.to_string()))?
            .len())
    }
}
