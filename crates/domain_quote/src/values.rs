//! Raw form input
//!
//! The form hands over a flat set of values keyed by field path
//! (`"fullname"`, `"complete.full_amount"`). Nested JSON objects are
//! flattened into dotted paths on the way in, and `null` is treated as an
//! absent field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QuoteError;

/// A single raw value as typed or toggled by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Number(serde_json::Number),
    List(Vec<Value>),
}

impl FieldValue {
    /// Returns the name of the value's type as used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "boolean",
            FieldValue::Text(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::List(_) => "array",
        }
    }

    /// Returns the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Form values keyed by field path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    /// Creates an empty set of values
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds form values from a JSON object
    ///
    /// Nested objects become dotted paths, so `{"complete": {"is_active": true}}`
    /// and `{"complete.is_active": true}` produce the same values.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::InvalidInput` if the root is not an object.
    pub fn from_json(value: &Value) -> Result<Self, QuoteError> {
        let object = value
            .as_object()
            .ok_or_else(|| QuoteError::invalid_input("form values must be a JSON object"))?;

        let mut values = Self::new();
        for (key, child) in object {
            values.flatten_into(key.clone(), child);
        }
        Ok(values)
    }

    fn flatten_into(&mut self, path: String, value: &Value) {
        match value {
            Value::Null => {}
            Value::Bool(flag) => {
                self.0.insert(path, FieldValue::Flag(*flag));
            }
            Value::String(text) => {
                self.0.insert(path, FieldValue::Text(text.clone()));
            }
            Value::Number(number) => {
                self.0.insert(path, FieldValue::Number(number.clone()));
            }
            Value::Array(items) => {
                self.0.insert(path, FieldValue::List(items.clone()));
            }
            Value::Object(object) => {
                for (key, child) in object {
                    self.flatten_into(format!("{}.{}", path, key), child);
                }
            }
        }
    }

    /// Returns the value at a path
    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.0.get(path)
    }

    /// Returns the text at a path, if the value there is text
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(FieldValue::as_text)
    }

    /// Returns the flag at a path, if the value there is a boolean
    pub fn flag(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(FieldValue::as_flag)
    }

    /// Sets the value at a path, returning the previous value
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.0.insert(path.into(), value.into())
    }

    /// Removes the value at a path
    pub fn remove(&mut self, path: &str) -> Option<FieldValue> {
        self.0.remove(path)
    }

    /// Returns true if a value is present at the path
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Iterates over all values in path order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(path, value)| (path.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for FormValues {
    type Error = QuoteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(&value)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_flatten_to_paths() {
        let values = FormValues::from_json(&json!({
            "fullname": "Jane Doe",
            "complete": { "is_active": true, "full_amount": "$800" },
        }))
        .unwrap();

        assert_eq!(values.text("fullname"), Some("Jane Doe"));
        assert_eq!(values.flag("complete.is_active"), Some(true));
        assert_eq!(values.text("complete.full_amount"), Some("$800"));
        assert!(!values.contains("complete"));
    }

    #[test]
    fn test_null_is_absent() {
        let values = FormValues::from_json(&json!({ "fee_amount": null })).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        let result = FormValues::from_json(&json!(["fullname"]));
        assert!(matches!(result, Err(QuoteError::InvalidInput(_))));
    }

    #[test]
    fn test_kinds() {
        let values = FormValues::from_json(&json!({
            "a": 3,
            "b": [1, 2],
            "c": false,
        }))
        .unwrap();

        assert_eq!(values.get("a").unwrap().kind(), "number");
        assert_eq!(values.get("b").unwrap().kind(), "array");
        assert_eq!(values.get("c").unwrap().kind(), "boolean");
    }

    #[test]
    fn test_deserialize_flattens() {
        let values: FormValues =
            serde_json::from_str(r#"{"third_party_coverage": {"is_active": false}}"#).unwrap();
        assert_eq!(values.flag("third_party_coverage.is_active"), Some(false));
    }
}
