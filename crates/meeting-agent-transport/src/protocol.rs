//! Wire protocol for the HTTP API.

use meeting_agent_core::{AgentStatus, MessageEntry, NewMessage};
use meeting_agent_session::RecentMessages;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Confirmation returned by start/stop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// Status after the command was applied.
    pub status: AgentStatus,
}

impl ControlResponse {
    #[must_use]
    pub fn started(status: AgentStatus) -> Self {
        Self {
            message: "Agent start command received".to_string(),
            status,
        }
    }

    #[must_use]
    pub fn stopped(status: AgentStatus) -> Self {
        Self {
            message: "Agent stopped".to_string(),
            status,
        }
    }
}

/// Body of `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageEntry>,
    pub total_count: usize,
}

impl From<RecentMessages> for MessagesResponse {
    fn from(recent: RecentMessages) -> Self {
        Self {
            messages: recent.messages,
            total_count: recent.total_count,
        }
    }
}

/// Body of a successful `POST /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMessageResponse {
    pub message: String,
    pub entry: MessageEntry,
}

impl AddMessageResponse {
    #[must_use]
    pub fn added(entry: MessageEntry) -> Self {
        Self {
            message: "Message added successfully".to_string(),
            entry,
        }
    }
}

/// Read a `POST /messages` body.
///
/// Only `message` is checked, and only for presence as a string. A
/// `sender` or `response` that is absent or not a string falls back to the
/// entry default.
#[must_use]
pub fn submission_from_body(body: &Value) -> NewMessage {
    let text = |key: &str| body.get(key).and_then(Value::as_str).map(ToString::to_string);

    NewMessage {
        message: text("message"),
        sender: text("sender"),
        response: text("response"),
    }
}

/// Error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
