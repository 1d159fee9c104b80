//! Record value type

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A stored record.
///
/// Both fields are required to be non-empty before a record is accepted by
/// the store. Missing and `null` fields decode as empty strings so that the
/// validation gate, not the decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Unique key
    #[serde(rename = "ID", default, deserialize_with = "null_as_empty")]
    pub id: String,

    /// Free-text payload
    #[serde(rename = "Message", default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Fields that are required but empty, in schema order
    pub fn missing_fields(&self) -> Vec<RecordField> {
        RecordField::ALL
            .into_iter()
            .filter(|field| field.value_of(self).is_empty())
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID:{},Message:{}", self.id, self.message)
    }
}

/// Required fields of a [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Id,
    Message,
}

impl RecordField {
    /// Every field, in schema order
    pub const ALL: [RecordField; 2] = [RecordField::Id, RecordField::Message];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::Id => "ID",
            RecordField::Message => "Message",
        }
    }

    fn value_of<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            RecordField::Id => &record.id,
            RecordField::Message => &record.message,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
