//! Status service owning the agent status record and the message log.

use meeting_agent_core::{AgentStatus, MessageEntry, MessageStore, NewMessage, StorageError};
use tokio::sync::RwLock;

/// Number of entries returned by [`StatusService::list_messages`].
pub const RECENT_MESSAGES: usize = 10;

/// Status service error.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Message is required")]
    MessageRequired,
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Window of the message log returned to callers.
#[derive(Debug, Clone)]
pub struct RecentMessages {
    /// Most recent entries, oldest first.
    pub messages: Vec<MessageEntry>,
    /// Number of entries ever appended.
    pub total_count: usize,
}

/// Guarded owner of the process-wide agent state.
///
/// Every mutation takes the status write lock for its whole duration, so
/// appends to the store and the `message_count` / `last_message` update
/// happen as one step.
pub struct StatusService<S>
where
    S: MessageStore,
{
    store: S,
    status: RwLock<AgentStatus>,
}

impl<S> StatusService<S>
where
    S: MessageStore,
{
    /// Create a service with a default status record over `store`.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: RwLock::new(AgentStatus::default()),
        }
    }

    /// Snapshot of the current status.
    pub async fn status(&self) -> AgentStatus {
        self.status.read().await.clone()
    }

    /// Record that the agent should be running.
    ///
    /// Nothing is launched; the agent process is managed elsewhere.
    pub async fn start_agent(&self) -> AgentStatus {
        let mut status = self.status.write().await;
        status.mark_started();
        tracing::info!("Agent start command received");
        status.clone()
    }

    /// Record that the agent should be stopped.
    pub async fn stop_agent(&self) -> AgentStatus {
        let mut status = self.status.write().await;
        status.mark_stopped();
        tracing::info!("Agent stopped");
        status.clone()
    }

    /// The last [`RECENT_MESSAGES`] entries plus the total count.
    ///
    /// # Errors
    /// Returns error if the store cannot be read.
    pub async fn list_messages(&self) -> Result<RecentMessages, ServiceError> {
        // Hold the read side so a concurrent append can't split the pair.
        let _status = self.status.read().await;
        let messages = self.store.list_recent(RECENT_MESSAGES).await?;
        let total_count = self.store.count().await?;
        tracing::debug!(returned = messages.len(), total_count, "Listed messages");

        Ok(RecentMessages {
            messages,
            total_count,
        })
    }

    /// Append a message to the log.
    ///
    /// # Errors
    /// Returns [`ServiceError::MessageRequired`] if the submission has no
    /// message text; nothing is recorded in that case.
    pub async fn add_message(&self, submission: NewMessage) -> Result<MessageEntry, ServiceError> {
        let entry =
            MessageEntry::from_submission(submission).ok_or(ServiceError::MessageRequired)?;

        let mut status = self.status.write().await;
        self.store.append(entry.clone()).await?;
        let count = self.store.count().await?;
        status.record_message(&entry, count);

        tracing::info!(sender = %entry.sender, message_count = count, "Message added");
        Ok(entry)
    }
}
