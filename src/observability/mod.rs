//! Observability subsystem
//!
//! - Structured logging (JSON by default) through `tracing`
//! - A closed set of diagnostic event names
//!
//! # Principles
//!
//! 1. The record core never logs; callers log at the boundary
//! 2. Every log line names its [`Event`]
//! 3. Observability failure is reported, never a panic
//!
//! # Usage
//!
//! ```ignore
//! use data_api::observability::{self, Event, LogConfig};
//!
//! observability::init(&LogConfig::default())?;
//! tracing::info!(event = %Event::Run, "Listening on port 8080");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init, LogConfig, LogFormat};

use thiserror::Error;

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Observability errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObservabilityError {
    /// Level directive could not be parsed
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// A global subscriber is already installed
    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}
