//! Field presence
//!
//! Explicit tri-state classification of an inbound field, used instead of
//! loose comparisons against an absence marker.

use serde_json::Value;

/// How a single inbound field showed up in a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence<'a> {
    /// The field was not sent at all (or sent as `null` in a typed body)
    Absent,
    /// The field was sent and is a non-empty string
    Valid(&'a str),
    /// The field was sent but is empty or not a string
    Invalid,
}

impl<'a> Presence<'a> {
    /// Classify an optional string field from a typed request body.
    pub fn of_str(value: Option<&'a str>) -> Self {
        match value {
            None => Self::Absent,
            Some("") => Self::Invalid,
            Some(s) => Self::Valid(s),
        }
    }

    /// Classify a field looked up in a raw JSON object.
    ///
    /// An explicit `null` counts as present-but-invalid: the key was sent.
    pub fn of_json(value: Option<&'a Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::String(s)) if !s.is_empty() => Self::Valid(s),
            Some(_) => Self::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The value, if valid
    pub fn value(&self) -> Option<&'a str> {
        match *self {
            Self::Valid(s) => Some(s),
            _ => None,
        }
    }
}
