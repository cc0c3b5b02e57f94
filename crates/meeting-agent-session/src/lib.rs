//! Status service and message log storage for the meeting agent.
//!
//! Provides:
//! - `StatusService` - Guarded owner of the agent status and message log
//! - Storage implementations (memory)

pub mod service;
pub mod storage;

pub use service::{RecentMessages, ServiceError, StatusService};

#[cfg(feature = "memory")]
pub use storage::MemoryMessageStore;
