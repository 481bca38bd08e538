//! Open-map student records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute holding the primary key of every record.
pub const KEY_ATTRIBUTE: &str = "studentId";

/// A single student record: an open attribute map keyed by `studentId`.
///
/// No schema is enforced beyond the key attribute. Callers may persist any
/// additional attributes and they round-trip untouched, including numeric
/// values of either JSON flavour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentRecord(Map<String, Value>);

impl StudentRecord {
    /// Wrap an attribute map.
    #[must_use]
    pub const fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// The record's primary key, when present as a string.
    #[must_use]
    pub fn student_id(&self) -> Option<&str> {
        self.get_str(KEY_ATTRIBUTE)
    }

    /// Attribute lookup.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// String attribute lookup.
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    /// Set an attribute, returning the previous value when one existed.
    pub fn set(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Number of attributes on the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record carries no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the record into its attribute map.
    #[must_use]
    pub fn into_attributes(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for StudentRecord {
    fn from(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }
}

impl From<StudentRecord> for Value {
    fn from(record: StudentRecord) -> Self {
        Self::Object(record.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> StudentRecord {
        serde_json::from_value(value).expect("record")
    }

    #[test]
    fn key_accessor_requires_a_string() {
        let named = record(json!({"studentId": "s-1", "name": "Ada"}));
        assert_eq!(named.student_id(), Some("s-1"));

        let numeric = record(json!({"studentId": 7}));
        assert_eq!(numeric.student_id(), None);

        assert_eq!(StudentRecord::default().student_id(), None);
    }

    #[test]
    fn serde_shape_is_the_bare_object() {
        let original = json!({"studentId": "s-1", "email": "ada@example.com", "credits": 12});
        let round_tripped = serde_json::to_value(record(original.clone())).expect("serialize");
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn extra_attributes_are_preserved() {
        let mut rec = record(json!({"studentId": "s-1"}));
        assert!(rec.set("advisor", json!("Dr. Byrne")).is_none());
        assert_eq!(rec.get_str("advisor"), Some("Dr. Byrne"));
        assert_eq!(rec.len(), 2);
        assert!(!rec.is_empty());
    }
}
