//! # Generic Entity Records
//!
//! A [`Record`] is one entity deserialized from a data file: a mapping from
//! field name to a dynamically typed JSON value. `serde_json::Value` is the
//! tagged union over the six JSON types; the accessors here turn a missing
//! field or a wrong-type access into a structured [`FieldError`] instead of
//! a panic.
//!
//! Records have no identity beyond their field contents. Uniqueness is not
//! enforced anywhere in the stack.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Error raised by typed field access on a [`Record`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The record has no field with this name.
    #[error("field '{field}' is missing")]
    Missing {
        /// Name of the absent field.
        field: String,
    },

    /// The field exists but holds a value of a different JSON type.
    #[error("field '{field}' is {actual}, expected {expected}")]
    TypeMismatch {
        /// Name of the field.
        field: String,
        /// The JSON type the accessor expected.
        expected: &'static str,
        /// The JSON type actually stored.
        actual: &'static str,
    },

    /// The field is a string but does not parse as an RFC 3339 date-time.
    #[error("field '{field}' is not an RFC 3339 date-time: {reason}")]
    InvalidDateTime {
        /// Name of the field.
        field: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// The JSON type word for a value: `string`, `number`, `boolean`, `null`,
/// `array`, or `object`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One entity loaded from a data file.
///
/// Deserializes transparently from a JSON object, so a data file's top-level
/// value can be read directly as `Vec<Record>`. Fields are keyed by name;
/// `serde_json::Map` iterates them in sorted name order, not source order.
/// Nothing in the stack depends on field order. Record order within a file
/// is kept by [`crate::EntityCollection`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create a record from a JSON object map.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if the record has a field with this name.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// The raw value of a field, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Iterate `(name, value)` pairs in sorted field-name order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// The raw value of a field, or [`FieldError::Missing`].
    pub fn require(&self, field: &str) -> Result<&Value, FieldError> {
        self.0.get(field).ok_or_else(|| FieldError::Missing {
            field: field.to_string(),
        })
    }

    /// The string value of a field.
    pub fn require_str(&self, field: &str) -> Result<&str, FieldError> {
        let value = self.require(field)?;
        value.as_str().ok_or_else(|| mismatch(field, "string", value))
    }

    /// The integer value of a field.
    ///
    /// A JSON number that is not representable as `i64` (a float, or an
    /// out-of-range unsigned value) is a type mismatch, not a truncation.
    pub fn require_i64(&self, field: &str) -> Result<i64, FieldError> {
        let value = self.require(field)?;
        value.as_i64().ok_or_else(|| mismatch(field, "integer", value))
    }

    /// The numeric value of a field as `f64`.
    pub fn require_f64(&self, field: &str) -> Result<f64, FieldError> {
        let value = self.require(field)?;
        value.as_f64().ok_or_else(|| mismatch(field, "number", value))
    }

    /// The boolean value of a field.
    pub fn require_bool(&self, field: &str) -> Result<bool, FieldError> {
        let value = self.require(field)?;
        value.as_bool().ok_or_else(|| mismatch(field, "boolean", value))
    }

    /// The array value of a field.
    pub fn require_array(&self, field: &str) -> Result<&[Value], FieldError> {
        let value = self.require(field)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(field, "array", value))
    }

    /// The object value of a field.
    pub fn require_object(&self, field: &str) -> Result<&Map<String, Value>, FieldError> {
        let value = self.require(field)?;
        value.as_object().ok_or_else(|| mismatch(field, "object", value))
    }

    /// The RFC 3339 date-time value of a string field, converted to UTC.
    ///
    /// Event records carry their dates as strings; this parses them without
    /// mutating the stored value. A non-string field is a
    /// [`FieldError::TypeMismatch`]; a string that does not parse is a
    /// [`FieldError::InvalidDateTime`] carrying the parser diagnostic.
    pub fn require_datetime(&self, field: &str) -> Result<DateTime<Utc>, FieldError> {
        let raw = self.require_str(field)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| FieldError::InvalidDateTime {
                field: field.to_string(),
                reason: e.to_string(),
            })
    }

    /// Consume the record, returning the underlying field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

fn mismatch(field: &str, expected: &'static str, actual: &Value) -> FieldError {
    FieldError::TypeMismatch {
        field: field.to_string(),
        expected,
        actual: json_type_name(actual),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for JSON values as they appear in record fields.
    /// Floats are excluded so equality assertions stay exact.
    fn field_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,24}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    fn record_strategy() -> impl Strategy<Value = Record> {
        prop::collection::btree_map("[a-z]{1,8}", field_value(), 0..8)
            .prop_map(|m| Record::new(m.into_iter().collect()))
    }

    proptest! {
        /// Records survive a serde round trip field-for-field.
        #[test]
        fn serde_round_trip(record in record_strategy()) {
            let text = serde_json::to_string(&record).unwrap();
            let parsed: Record = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(parsed, record);
        }

        /// The string accessor succeeds exactly when the field is a string.
        #[test]
        fn string_accessor_agrees_with_stored_type(record in record_strategy()) {
            for (name, value) in record.fields() {
                prop_assert_eq!(record.require_str(name).is_ok(), value.is_string());
            }
        }

        /// Access to an absent field is always a Missing error, never a panic.
        #[test]
        fn absent_field_is_missing_error(record in record_strategy()) {
            // Generated field names are lowercase-only, so this cannot collide.
            let err = record.require("NOT_A_FIELD").unwrap_err();
            prop_assert_eq!(err, FieldError::Missing { field: "NOT_A_FIELD".to_string() });
        }
    }
}
