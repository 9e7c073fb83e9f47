//! Source resolution seam.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to turn a configured source into a file path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No file matches the request.
    #[error("cannot find module '{request}' from '{}'", base_dir.display())]
    NotFound { request: String, base_dir: PathBuf },

    #[error("I/O error while resolving '{request}': {source}")]
    Io {
        request: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for source resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Resolves an entry-point's configured source (e.g. `src/index`) to the
/// absolute path of an existing file.
///
/// Implementations must return [`ResolveError::NotFound`] when nothing
/// matches; validation reports that as a missing source rather than a
/// resolver failure.
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, request: &str, base_dir: &Path) -> ResolveResult<PathBuf>;
}

impl<F> SourceResolver for F
where
    F: Fn(&str, &Path) -> ResolveResult<PathBuf> + Send + Sync,
{
    fn resolve(&self, request: &str, base_dir: &Path) -> ResolveResult<PathBuf> {
        self(request, base_dir)
    }
}
