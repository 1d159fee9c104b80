//! Process identity
//!
//! Assigned once at startup and read-only afterwards.

use std::fs;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name and per-process instance id of the running service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    #[serde(rename = "service-name")]
    name: String,

    #[serde(rename = "service-id")]
    instance_id: String,
}

impl ServiceInfo {
    /// Identity for a freshly started process, with a random instance id
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_instance_id(name, Uuid::new_v4().to_string())
    }

    /// Identity with an explicit instance id
    pub fn with_instance_id(name: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance_id: instance_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

/// Host name for log fields
///
/// Reads `HOSTNAME`, then `/etc/hostname`, else `"unknown"`.
pub fn hostname() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .or_else(|| fs::read_to_string("/etc/hostname").ok())
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
