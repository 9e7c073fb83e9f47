use std::path::PathBuf;

use crate::{EntrypointConfig, FieldValue, Manifest};

/// Source file used when the manifest does not configure one.
pub const DEFAULT_SOURCE: &str = "src/index";

/// One build target of a package, with the manifest fields that point
/// consumers at its artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Entrypoint {
    /// Display name: the package name, plus `/<dir>` for nested entry-points.
    pub name: String,
    /// Directory holding this entry-point's `package.json`.
    pub directory: PathBuf,
    /// Source file as written by the user, relative to `directory`.
    pub config_source: String,
    pub main: Option<String>,
    pub module: Option<String>,
    pub umd_main: Option<String>,
    pub browser: Option<FieldValue>,
    pub react_native: Option<FieldValue>,
    pub config: EntrypointConfig,
}

impl Entrypoint {
    /// Creates an entry-point with no fields set and the default source.
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            config_source: DEFAULT_SOURCE.to_owned(),
            main: None,
            module: None,
            umd_main: None,
            browser: None,
            react_native: None,
            config: EntrypointConfig::default(),
        }
    }

    /// Builds an entry-point from its parsed manifest.
    ///
    /// A non-string `source` is ignored here; loaders that need it rejected
    /// type-check the config before calling this.
    pub fn from_manifest(
        name: impl Into<String>,
        directory: impl Into<PathBuf>,
        manifest: Manifest,
    ) -> Self {
        let config_source = manifest
            .config
            .source()
            .unwrap_or(DEFAULT_SOURCE)
            .to_owned();
        Self {
            name: name.into(),
            directory: directory.into(),
            config_source,
            main: manifest.main,
            module: manifest.module,
            umd_main: manifest.umd_main,
            browser: manifest.browser,
            react_native: manifest.react_native,
            config: manifest.config,
        }
    }

    /// Whether an ES-module build is published for this entry-point.
    #[must_use]
    pub fn has_module_build(&self) -> bool {
        self.module.is_some()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        self.config.insert("source", source.clone());
        self.config_source = source;
        self
    }

    pub fn with_main(mut self, main: impl Into<String>) -> Self {
        self.main = Some(main.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_umd_main(mut self, umd_main: impl Into<String>) -> Self {
        self.umd_main = Some(umd_main.into());
        self
    }

    pub fn with_umd_name(mut self, umd_name: impl Into<String>) -> Self {
        self.config.insert("umdName", umd_name.into());
        self
    }

    pub fn with_browser(mut self, browser: impl Into<FieldValue>) -> Self {
        self.browser = Some(browser.into());
        self
    }

    pub fn with_react_native(mut self, react_native: impl Into<FieldValue>) -> Self {
        self.react_native = Some(react_native.into());
        self
    }
}
