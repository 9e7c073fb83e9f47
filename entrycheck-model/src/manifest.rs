//! The subset of `package.json` that entry-point validation reads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FieldValue;

/// Entry-point fields of a `package.json`.
///
/// Unknown keys are ignored. A recognised key holding the wrong JSON type is a
/// deserialisation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, rename = "umd:main", skip_serializing_if = "Option::is_none")]
    pub umd_main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<FieldValue>,
    #[serde(default, rename = "react-native", skip_serializing_if = "Option::is_none")]
    pub react_native: Option<FieldValue>,
    /// The user-authored `preconstruct` block.
    #[serde(default, rename = "preconstruct", skip_serializing_if = "EntrypointConfig::is_empty")]
    pub config: EntrypointConfig,
}

impl Manifest {
    /// Parses a manifest from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Raw user configuration attached to an entry-point.
///
/// Kept as an untyped JSON object: only a handful of keys are consulted and
/// their presence *and type* are part of what gets validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntrypointConfig(Map<String, Value>);

impl EntrypointConfig {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The configured source file, if set to a string.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.get("source").and_then(Value::as_str)
    }

    /// The global name of the UMD bundle, if set to a string.
    #[must_use]
    pub fn umd_name(&self) -> Option<&str> {
        self.get("umdName").and_then(Value::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umd_name_must_be_a_string() {
        let mut config = EntrypointConfig::default();
        config.insert("umdName", 42);
        assert_eq!(config.umd_name(), None);

        config.insert("umdName", "MyPkg");
        assert_eq!(config.umd_name(), Some("MyPkg"));
    }

    #[test]
    fn empty_config_is_not_serialized() {
        let manifest = Manifest {
            name: Some("pkg".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(json, r#"{"name":"pkg"}"#);
    }
}
