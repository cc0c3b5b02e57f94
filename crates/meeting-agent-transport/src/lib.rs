//! Transport layer for the meeting agent status service.
//!
//! Provides:
//! - Wire protocol (JSON request/response bodies)
//! - HTTP router and error rendering (feature: http)

pub mod protocol;

#[cfg(feature = "http")]
pub mod error;

#[cfg(feature = "http")]
pub mod http;

pub use protocol::{AddMessageResponse, ControlResponse, ErrorResponse, MessagesResponse};

#[cfg(feature = "http")]
pub use error::ApiError;

#[cfg(feature = "http")]
pub use http::create_router;
