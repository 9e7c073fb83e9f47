use std::path::PathBuf;

use crate::Entrypoint;

/// A publishable package and the entry-points it declares.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Package name from `package.json`; every expected field value derives from it.
    pub name: String,
    /// Absolute package root. Entry-point sources must live under it.
    pub directory: PathBuf,
    pub entrypoints: Vec<Entrypoint>,
}

impl Package {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            entrypoints: Vec::new(),
        }
    }

    pub fn with_entrypoint(mut self, entrypoint: Entrypoint) -> Self {
        self.entrypoints.push(entrypoint);
        self
    }
}
