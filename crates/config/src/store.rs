//! In-memory normalized key-value store.
//!
//! Responsibilities:
//! - Hold every merged configuration entry under its normalized key.
//! - Apply key and value normalization on every write.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader`).
//! - Export formats (see `export.rs`).
//!
//! Invariants:
//! - Keys are unique after normalization; the last write for a key wins.
//! - Iteration order is unspecified.
//! - Not synchronized; callers serialize access themselves.

use std::collections::HashMap;
use std::collections::hash_map;

use crate::value::{Value, normalize_key, normalize_value};

/// Mapping from normalized key to normalized value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    entries: HashMap<String, Value>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes `key` and `value`, replacing any existing entry.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.entries
            .insert(normalize_key(key), normalize_value(value.into()));
    }

    /// Normalizes only `key`; the value is stored exactly as given.
    pub fn set_raw(&mut self, key: &str, value: Value) {
        self.entries.insert(normalize_key(key), value);
    }

    /// Looks up a value; the key is normalized first.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&normalize_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    /// All entries. Callers must not rely on ordering.
    pub fn get_all(&self) -> &HashMap<String, Value> {
        &self.entries
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets every pair in order and returns how many were written.
    pub fn merge<I, K, V>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut count = 0;
        for (key, value) in pairs {
            self.set(key.as_ref(), value);
            count += 1;
        }
        count
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut store = Store::new();
        store.set("app_name", "MyApp");

        assert_eq!(store.get("APP_NAME"), Some(&Value::from("MyApp")));
        assert_eq!(store.get("App_Name"), Some(&Value::from("MyApp")));
        assert!(store.contains_key("app_NAME"));
    }

    #[test]
    fn test_set_coerces_types() {
        let mut store = Store::new();
        store.set("APP_PORT", "1234");
        store.set("APP_DEBUG", "true");

        assert_eq!(store.get("APP_PORT"), Some(&Value::Int(1234)));
        assert_eq!(store.get("APP_DEBUG"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = Store::new();
        store.set("port", 8080);
        store.set("PORT", "3000");

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("port"), Some(&Value::Int(3000)));
    }

    #[test]
    fn test_set_raw_skips_value_normalization() {
        let mut store = Store::new();
        store.set_raw("port", Value::from("8080"));

        assert_eq!(store.get("PORT"), Some(&Value::from("8080")));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = Store::new();
        assert!(store.get("NOPE").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_merge_counts_pairs() {
        let mut store = Store::new();
        let written = store.merge([("a", "1"), ("b", "x"), ("A", "2")]);

        assert_eq!(written, 3);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some(&Value::Int(2)));
    }
}
