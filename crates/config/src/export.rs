//! JSON and YAML export of the store.
//!
//! Exports are sorted by key so the output is stable across runs. The
//! `from_*` constructors feed documents back through the normal decode and
//! normalization path.

use std::collections::BTreeMap;
use std::fmt;

use crate::loader::{ConfigError, Format, decode_map, inline_path};
use crate::store::Store;
use crate::value::Value;

impl Store {
    fn sorted(&self) -> BTreeMap<&str, &Value> {
        self.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    /// Pretty-printed JSON object of every entry.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        serde_json::to_vec_pretty(&self.sorted()).map_err(serialize_error)
    }

    /// YAML mapping of every entry.
    pub fn to_yaml(&self) -> Result<Vec<u8>, ConfigError> {
        serde_yaml::to_string(&self.sorted())
            .map(String::into_bytes)
            .map_err(serialize_error)
    }

    /// Builds a store from a JSON object document.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ConfigError> {
        Self::from_document(Format::Json, bytes)
    }

    /// Builds a store from a YAML mapping document.
    pub fn from_yaml(bytes: &[u8]) -> Result<Self, ConfigError> {
        Self::from_document(Format::Yaml, bytes)
    }

    fn from_document(format: Format, bytes: &[u8]) -> Result<Self, ConfigError> {
        let mut store = Store::new();
        store.merge(decode_map(format, bytes, &inline_path())?);
        Ok(store)
    }
}

fn serialize_error(err: impl fmt::Display) -> ConfigError {
    ConfigError::Serialize(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Store {
        let mut store = Store::new();
        store.set("APP_NAME", "TestApp");
        store.set("APP_PORT", 9090);
        store.set("APP_DEBUG", true);
        store.set("RATIO", 0.25);
        store
    }

    #[test]
    fn test_json_export_is_sorted_and_pretty() {
        let json = String::from_utf8(sample().to_json().unwrap()).unwrap();
        let expected = r#"{
  "APP_DEBUG": true,
  "APP_NAME": "TestApp",
  "APP_PORT": 9090,
  "RATIO": 0.25
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_yaml_export() {
        let yaml = String::from_utf8(sample().to_yaml().unwrap()).unwrap();
        assert!(yaml.contains("APP_NAME: TestApp"));
        assert!(yaml.contains("APP_PORT: 9090"));
        assert!(yaml.contains("APP_DEBUG: true"));
    }

    #[test]
    fn test_round_trips() {
        let store = sample();
        assert_eq!(Store::from_json(&store.to_json().unwrap()).unwrap(), store);
        assert_eq!(Store::from_yaml(&store.to_yaml().unwrap()).unwrap(), store);
    }

    #[test]
    fn test_empty_store_exports_empty_object() {
        let store = Store::new();
        assert_eq!(store.to_json().unwrap(), b"{}");
        let reimported = Store::from_yaml(&store.to_yaml().unwrap()).unwrap();
        assert!(reimported.is_empty());
    }
}
