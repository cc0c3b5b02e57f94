//! Core abstractions for the meeting agent status service.
//!
//! This crate provides the fundamental building blocks:
//! - `AgentStatus` / `MessageEntry` - Status record and message log entries
//! - `HealthInfo`, `ContractInfo`, `Documentation` - Fixed descriptive records
//! - `MessageStore` - Storage trait for the message log

pub mod info;
pub mod traits;
pub mod types;

pub use info::{ContractInfo, Documentation, HealthInfo, SERVICE_NAME, SERVICE_VERSION};
pub use traits::{MessageStore, StorageError};
pub use types::{AgentStatus, MessageEntry, NewMessage};
