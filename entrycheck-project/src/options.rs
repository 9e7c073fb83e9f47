//! Typed view of the `preconstruct` config keys used for discovery.

use std::path::Path;

use entrycheck_model::EntrypointConfig;
use serde::Deserialize;
use serde_json::Value;

use crate::{ProjectError, ProjectResult};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DiscoveryOptions {
    /// Glob patterns of package directories (root manifest only).
    #[serde(default)]
    pub packages: Option<Vec<String>>,
    /// Entry-point directories relative to the package.
    #[serde(default)]
    pub entrypoints: Option<Vec<String>>,
    /// Source file of the entry-point. `umdName` is not typed here: a
    /// non-string value is reported by validation, not by loading.
    #[serde(default)]
    pub source: Option<String>,
}

impl DiscoveryOptions {
    pub fn from_config(config: &EntrypointConfig, manifest_path: &Path) -> ProjectResult<Self> {
        serde_json::from_value(Value::Object(config.as_map().clone())).map_err(|source| {
            ProjectError::InvalidManifest {
                path: manifest_path.to_owned(),
                source,
            }
        })
    }
}
