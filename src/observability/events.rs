//! Diagnostic events
//!
//! Every structured log line the service emits carries an `event` field
//! drawn from this closed set.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process identity assigned, logging ready
    Init,
    /// Listener bound, serving requests
    Run,
    /// Graceful shutdown started
    Shutdown,

    // Request rejections
    /// Payload could not be decoded
    Unmarshal,
    /// One entry per missing field
    ValidateErrors,
    /// Summary of a candidate that failed validation
    InvalidDataStruct,
    /// Duplicate create or no-op update
    Conflict,
    /// Operation on an absent key
    NotFound,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Init => "init",
            Event::Run => "run",
            Event::Shutdown => "shutdown",
            Event::Unmarshal => "unmarshal",
            Event::ValidateErrors => "validate-errors",
            Event::InvalidDataStruct => "invalid-data-struct",
            Event::Conflict => "conflict",
            Event::NotFound => "not-found",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
