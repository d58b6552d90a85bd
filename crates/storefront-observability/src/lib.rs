//! Observability for the storefront.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating every log line of one shopping session
//! - `StructuredLogger` - Structured logging with session and component context
//! - `init_subscriber` - Process-wide `tracing` subscriber setup

mod logging;
mod session;
mod subscriber;

pub use logging::*;
pub use session::SessionId;
pub use subscriber::{env_level, init_subscriber, level_from_directive, SubscriberError};
