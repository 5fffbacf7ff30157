//! Payload field validation
//!
//! Request bodies are checked against a declared field schema before serde
//! sees them, so every offending field can be reported by name in a single
//! response instead of serde's first-error-wins message.
//!
//! All payload fields are strings. Rules, per declared field:
//! - required and absent or `null` → "field required"
//! - present, non-null, not a string → "input should be a valid string"
//! - optional and absent or `null` → serde default applies
//!
//! Undeclared fields are ignored.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pseudo-field name used when the body as a whole is unusable
pub const BODY_FIELD: &str = "body";

pub const MSG_FIELD_REQUIRED: &str = "field required";
pub const MSG_NOT_A_STRING: &str = "input should be a valid string";
pub const MSG_NOT_AN_OBJECT: &str = "input should be a JSON object";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Required,
    Optional,
}

/// One declared string field of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A payload type with a declared field schema
pub trait PayloadSchema: DeserializeOwned {
    /// Fields in declaration order; errors are reported in this order
    const FIELDS: &'static [FieldSpec];
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a raw JSON body against `T`'s schema and deserialize it
///
/// Returns every field error found, in schema order.
pub fn validate_body<T: PayloadSchema>(body: &[u8]) -> Result<T, Vec<FieldError>> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(vec![FieldError::new(BODY_FIELD, MSG_FIELD_REQUIRED)]);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| vec![FieldError::new(BODY_FIELD, format!("invalid JSON: {}", e))])?;

    validate_value(value)
}

/// Validate an already-parsed JSON value against `T`'s schema
fn validate_value<T: PayloadSchema>(value: Value) -> Result<T, Vec<FieldError>> {
    let mut object = match value {
        Value::Object(map) => map,
        _ => return Err(vec![FieldError::new(BODY_FIELD, MSG_NOT_AN_OBJECT)]),
    };

    let errors = check_fields(&object, T::FIELDS);
    if !errors.is_empty() {
        return Err(errors);
    }

    // Explicit nulls on optional fields mean "use the default"
    for spec in T::FIELDS {
        if spec.kind == FieldKind::Optional && matches!(object.get(spec.name), Some(Value::Null)) {
            object.remove(spec.name);
        }
    }

    serde_json::from_value(Value::Object(object))
        .map_err(|e| vec![FieldError::new(BODY_FIELD, e.to_string())])
}

fn check_fields(object: &Map<String, Value>, fields: &[FieldSpec]) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|spec| match (object.get(spec.name), spec.kind) {
            (None | Some(Value::Null), FieldKind::Required) => {
                Some(FieldError::new(spec.name, MSG_FIELD_REQUIRED))
            }
            (None | Some(Value::Null), FieldKind::Optional) => None,
            (Some(Value::String(_)), _) => None,
            (Some(_), _) => Some(FieldError::new(spec.name, MSG_NOT_A_STRING)),
        })
        .collect()
}
