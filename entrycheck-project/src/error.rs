//! Error types for project loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no package.json found in {}", .0.display())]
    MissingManifest(PathBuf),

    #[error("package at {} has no name", .0.display())]
    MissingName(PathBuf),

    #[error("invalid package pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to expand package pattern: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Result type for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
