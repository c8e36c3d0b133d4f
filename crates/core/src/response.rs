//! Wire response bodies.
//!
//! Success bodies encode to JSON as:
//!
//! ```json
//! {"value": "active"}
//! {"values": {"a": "1", "b": "2"}}
//! {"success": true, "message": "Field successfully set", "return": 1}
//! ```
//!
//! Failures encode through [`ErrorBody`], mirroring the gateway's message
//! envelope.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Body of a single-field read: `{"value": v}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    /// The stored value.
    pub value: String,
}

/// Body of a full-hash read: `{"values": {field: value}}`.
///
/// The mapping is ordered by field name; callers must not rely on
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    /// The full field-to-value mapping, empty when the key is absent.
    pub values: BTreeMap<String, String>,
}

/// Body of a mutation: success flag, human message, and the store's own
/// integer result (created/updated indicator for set, deleted count for
/// delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Always `true` for a completed mutation.
    pub success: bool,
    /// Human-readable summary.
    pub message: String,
    /// The store's integer result, echoed unmodified.
    #[serde(rename = "return")]
    pub affected: i64,
}

impl Outcome {
    /// A set outcome: `affected` is 1 when the field was created, 0 when
    /// an existing field was updated.
    pub fn set(affected: i64) -> Self {
        Self {
            success: true,
            message: "Field successfully set".into(),
            affected,
        }
    }

    /// A delete outcome: `affected` is the number of fields removed.
    pub fn deleted(affected: i64) -> Self {
        Self {
            success: true,
            message: "Field successfully deleted".into(),
            affected,
        }
    }
}

/// An HTTP-shaped action result: status plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: serde_json::Value,
}

impl Response {
    /// A 200 response wrapping any serializable body.
    ///
    /// Serialization of the body types in this module cannot fail; a
    /// failure would be a bug and is surfaced as a null body.
    pub fn ok(body: impl Serialize) -> Self {
        Self {
            status: 200,
            body: serde_json::to_value(body).unwrap_or(serde_json::Value::Null),
        }
    }
}

/// The gateway error envelope: `{"success": false, "title": ..., "status": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// The error message.
    pub title: String,
    /// The mapped HTTP status.
    pub status: u16,
}

impl From<&Error> for ErrorBody {
    fn from(error: &Error) -> Self {
        Self {
            success: false,
            title: error.to_string(),
            status: error.http_status(),
        }
    }
}
