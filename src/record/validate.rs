//! # Validation Gate
//!
//! Rejects structurally invalid candidates before they reach the store.
//! Decode failures and field failures are reported separately.

use super::errors::{RecordError, RecordResult};
use super::model::Record;

/// Stateless pre-store check
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGate;

impl ValidationGate {
    pub fn new() -> Self {
        Self
    }

    /// Decode a raw JSON payload into a candidate record
    pub fn decode(&self, payload: &[u8]) -> RecordResult<Record> {
        serde_json::from_slice(payload).map_err(|e| RecordError::MalformedInput(e.to_string()))
    }

    /// Check required fields, reporting every empty one
    pub fn validate(&self, candidate: Record) -> RecordResult<Record> {
        let missing = candidate.missing_fields();
        if missing.is_empty() {
            Ok(candidate)
        } else {
            Err(RecordError::MissingField(missing))
        }
    }

    /// Decode then validate
    pub fn check(&self, payload: &[u8]) -> RecordResult<Record> {
        let candidate = self.decode(payload)?;
        self.validate(candidate)
    }

    /// Decode, take the key from `id` instead of the payload, then validate
    ///
    /// Used when the key comes from the request path.
    pub fn check_with_id(&self, payload: &[u8], id: &str) -> RecordResult<Record> {
        let mut candidate = self.decode(payload)?;
        candidate.id = id.to_string();
        self.validate(candidate)
    }
}
