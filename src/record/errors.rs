//! # Record Errors
//!
//! The closed error taxonomy of the record core.

use thiserror::Error;

use super::model::RecordField;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Every way a record operation can be rejected
///
/// All variants are recoverable by the caller. Each carries the key or
/// field names needed to diagnose the rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    // ==================
    // Validation
    // ==================
    /// Payload is not a decodable record
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// One or more required fields are empty
    #[error("missing required field(s): {}", join_fields(.0))]
    MissingField(Vec<RecordField>),

    // ==================
    // Store
    // ==================
    /// Create on a key that is already present
    #[error("record {0} already exists")]
    AlreadyExists(String),

    /// Get, update or delete on an absent key
    #[error("record {0} not found")]
    NotFound(String),

    /// Update with a value identical to the stored one
    #[error("record {0} unchanged")]
    NoChange(String),
}

impl RecordError {
    /// Returns true for rejections caused by the candidate's shape
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecordError::MalformedInput(_) | RecordError::MissingField(_)
        )
    }
}

fn join_fields(fields: &[RecordField]) -> String {
    fields
        .iter()
        .map(RecordField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_all() {
        let err = RecordError::MissingField(vec![RecordField::Id, RecordField::Message]);
        assert_eq!(err.to_string(), "missing required field(s): ID, Message");
    }

    #[test]
    fn test_classification() {
        assert!(RecordError::MalformedInput("eof".into()).is_validation());
        assert!(RecordError::MissingField(vec![RecordField::Id]).is_validation());
        assert!(!RecordError::AlreadyExists("a".into()).is_validation());
        assert!(!RecordError::NoChange("a".into()).is_validation());
        assert!(!RecordError::NotFound("a".into()).is_validation());
    }
}
