//! Agent status and message log records.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Wallet address reported once the agent has been started.
pub const WALLET_ADDRESS_PLACEHOLDER: &str = "Agent wallet address will be shown here";

/// XMTP address reported once the agent has been started.
pub const XMTP_ADDRESS_PLACEHOLDER: &str = "XMTP address will be shown here";

/// Sender recorded when a message arrives without one.
pub const DEFAULT_SENDER: &str = "unknown";

/// Response recorded when a message arrives without one.
pub const DEFAULT_RESPONSE: &str = "No response generated";

/// Believed state of the externally-run agent.
///
/// The agent process itself is never launched from here; these fields only
/// record what the control plane has been told.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    /// Whether a start command has been received more recently than a stop.
    pub running: bool,
    /// Wallet address of the agent.
    pub wallet_address: String,
    /// XMTP messaging address of the agent.
    pub xmtp_address: String,
    /// Text of the most recently recorded message.
    pub last_message: String,
    /// Number of entries in the message log.
    pub message_count: usize,
}

impl AgentStatus {
    /// Mark the agent as running and fill in its addresses.
    pub fn mark_started(&mut self) {
        self.running = true;
        self.wallet_address = WALLET_ADDRESS_PLACEHOLDER.to_string();
        self.xmtp_address = XMTP_ADDRESS_PLACEHOLDER.to_string();
    }

    /// Mark the agent as stopped. Addresses and message stats are kept.
    pub const fn mark_stopped(&mut self) {
        self.running = false;
    }

    /// Record that `entry` was appended and the log now holds `count` entries.
    pub fn record_message(&mut self, entry: &MessageEntry, count: usize) {
        self.last_message.clone_from(&entry.message);
        self.message_count = count;
    }
}

/// A message submitted for recording. Only `message` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

impl NewMessage {
    /// Create a submission with just the message text.
    #[must_use]
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Set the sender.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Set the response.
    #[must_use]
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = Some(response.into());
        self
    }
}

/// One recorded interaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEntry {
    /// Creation time (Unix epoch seconds, fractional).
    pub timestamp: f64,
    /// Who sent the message.
    pub sender: String,
    /// Message text.
    pub message: String,
    /// Agent reply, if any was generated.
    pub response: String,
}

impl MessageEntry {
    /// Build an entry stamped with the current time, defaulting sender and
    /// response. Returns `None` when the submission carries no message text.
    #[must_use]
    pub fn from_submission(submission: NewMessage) -> Option<Self> {
        let message = submission.message?;
        Some(Self {
            timestamp: now(),
            sender: submission
                .sender
                .unwrap_or_else(|| DEFAULT_SENDER.to_string()),
            message,
            response: submission
                .response
                .unwrap_or_else(|| DEFAULT_RESPONSE.to_string()),
        })
    }
}

fn now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
