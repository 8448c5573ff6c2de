//! Residual storage for keys the vocabulary does not declare.

use serde_json::{Map, Value};

/// The contextual-metadata key. It is dropped on the way in and never
/// written back out.
pub const EXEMPT_KEY: &str = "@context";

/// Keys with no matching declared property, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownBag {
    entries: Map<String, Value>,
}

impl UnknownBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `value` under `key`. The exempt key is ignored and `false`
    /// returned.
    pub fn insert(&mut self, key: impl Into<String>, value: &Value) -> bool {
        let key = key.into();
        if key == EXEMPT_KEY {
            return false;
        }
        self.entries.insert(key, normalize(value));
        true
    }

    /// Returns the value captured under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Removes and returns the value captured under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` was captured.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of captured keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over captured entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Rebuilds `value` as an owned tree, descending through arrays and maps so
/// nested unrecognized structures stay inspectable.
#[must_use]
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exempt_key_is_never_stored() {
        let mut bag = UnknownBag::new();
        assert!(!bag.insert(EXEMPT_KEY, &json!("https://www.w3.org/ns/activitystreams")));
        assert!(bag.is_empty());
    }

    #[test]
    fn keeps_structure_and_order() {
        let mut bag = UnknownBag::new();
        bag.insert("zeta", &json!({"a": [1, 2, {"b": null}]}));
        bag.insert("alpha", &json!(true));
        let keys: Vec<&str> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha"]);
        assert_eq!(bag.get("zeta"), Some(&json!({"a": [1, 2, {"b": null}]})));
        assert_eq!(bag.remove("alpha"), Some(json!(true)));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn normalize_is_structural_identity() {
        let raw = json!({"x": [{"y": 1.5}, "z", null], "w": {"v": false}});
        assert_eq!(normalize(&raw), raw);
    }
}
