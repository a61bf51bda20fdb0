//! Signed payloads.
//!
//! A [`Payload`] maps field names to text values. It is backed by an ordered
//! map, so iteration is always ascending by key and insertion order never
//! affects the canonical string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::CoreError;

/// Field name to field value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, String>);

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder-style [`Payload::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove a field.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Get a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build a payload from a JSON object.
    ///
    /// Values are stringified as follows: strings verbatim, numbers and
    /// booleans by their JSON text, arrays and objects as compact JSON.
    /// `null` fields are dropped.
    ///
    /// Numbers use serde_json's rendering, which can differ from other JSON
    /// libraries (hutool included) for large floats and exponent notation.
    /// Send such values as strings when the peer formats them differently.
    pub fn from_json(value: &Value) -> Result<Self, CoreError> {
        match value {
            Value::Object(map) => Ok(Self::from_json_map(map)),
            other => Err(CoreError::NotAnObject(json_kind(other))),
        }
    }

    /// Build a payload from a JSON object map. See [`Payload::from_json`].
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        map.iter()
            .filter_map(|(k, v)| stringify(v).map(|s| (k.clone(), s)))
            .collect()
    }
}

/// Text form of a JSON value, or `None` for `null`.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        // Display for Value writes compact JSON
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Payload {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Payload {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl TryFrom<&Value> for Payload {
    type Error = CoreError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl IntoIterator for Payload {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iteration_is_sorted() {
        let payload = Payload::from([("viewId", "321"), ("appid", "123"), ("isIntegral", "0")]);
        let keys: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["appid", "isIntegral", "viewId"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let payload = Payload::from([("a", "1"), ("B", "2")]);
        let keys: Vec<&str> = payload.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["B", "a"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut payload = Payload::new();
        assert_eq!(payload.insert("k", "1"), None);
        assert_eq!(payload.insert("k", "2"), Some("1".to_string()));
        assert_eq!(payload.get("k"), Some("2"));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_from_json_stringifies_values() {
        let value = json!({
            "name": "x",
            "amount": 10,
            "ratio": 1.5,
            "flag": true,
            "note": null,
            "tags": ["a", "b"],
            "nested": {"k": "v"}
        });
        let payload = Payload::from_json(&value).unwrap();

        assert_eq!(payload.get("name"), Some("x"));
        assert_eq!(payload.get("amount"), Some("10"));
        assert_eq!(payload.get("ratio"), Some("1.5"));
        assert_eq!(payload.get("flag"), Some("true"));
        assert_eq!(payload.get("note"), None);
        assert_eq!(payload.get("tags"), Some(r#"["a","b"]"#));
        assert_eq!(payload.get("nested"), Some(r#"{"k":"v"}"#));
        assert_eq!(payload.len(), 6);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert_eq!(
            Payload::from_json(&json!([1, 2])),
            Err(CoreError::NotAnObject("array"))
        );
        assert_eq!(
            Payload::from_json(&json!("sign")),
            Err(CoreError::NotAnObject("string"))
        );
    }

    #[test]
    fn test_serde_transparent() {
        let payload = Payload::from([("a", "1")]);
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"a":"1"}"#);
        let back: Payload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
