//! Record kinds and the delete request/response payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which backend collection a table row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// A transient entry; its table carries an "exit time" column.
    Visitor,
    /// A permanent entry.
    Resident,
}

impl RecordKind {
    /// Visitor tables are the only ones with an exit time.
    pub fn from_exit_time_column(has_exit_time: bool) -> Self {
        if has_exit_time {
            Self::Visitor
        } else {
            Self::Resident
        }
    }

    /// Path of the deletion endpoint for this kind.
    pub const fn delete_path(self) -> &'static str {
        match self {
            Self::Visitor => "/delete_visitor",
            Self::Resident => "/delete_resident",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitor => f.write_str("visitor"),
            Self::Resident => f.write_str("resident"),
        }
    }
}

/// Body of `POST /delete_visitor` and `POST /delete_resident`.
///
/// Both keys are always serialized; a column missing from the table is sent
/// as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub license_plate: Option<String>,
    pub phone_number: Option<String>,
}

/// Body returned by the deletion endpoints.
///
/// The backend answers `{"success": true}`; anything else that still parses
/// as JSON is treated as a rejection. Kept as a raw value so a malformed but
/// valid JSON body is a rejection rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DeleteResponse(Value);

impl DeleteResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// True when the `success` field is truthy.
    pub fn is_success(&self) -> bool {
        self.0.get("success").is_some_and(is_truthy)
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
