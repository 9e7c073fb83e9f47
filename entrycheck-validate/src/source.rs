//! Entry-point source resolution and containment.

use std::path::{Component, Path, PathBuf};

use entrycheck_model::{Entrypoint, Package};
use tracing::debug;

use crate::{FatalReason, ResolveError, SourceResolver, ValidationError, ValidationResult};

/// Whether `path` is `dir` or lies beneath it.
///
/// Compares whole path components after folding `.` and `..`, so
/// `/repo/pkg-ab/src` is not inside `/repo/pkg-a`. No filesystem access.
#[must_use]
pub fn is_inside(path: &Path, dir: &Path) -> bool {
    normalize(path).starts_with(normalize(dir))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolves the entry-point's configured source and checks that the file
/// lives inside the package.
///
/// Returns the resolved path. A source that cannot be found is a fatal
/// `no-source` error; any other resolver failure is passed through as
/// [`ValidationError::Resolve`].
pub fn check_source(
    package: &Package,
    entrypoint: &Entrypoint,
    resolver: &dyn SourceResolver,
) -> ValidationResult<PathBuf> {
    let source = match resolver.resolve(&entrypoint.config_source, &entrypoint.directory) {
        Ok(source) => source,
        Err(ResolveError::NotFound { .. }) => {
            return Err(ValidationError::fatal(
                FatalReason::NoSource {
                    config_source: entrypoint.config_source.clone(),
                },
                &entrypoint.name,
            ));
        }
        Err(source) => {
            return Err(ValidationError::Resolve {
                source,
                entrypoint: entrypoint.name.clone(),
            });
        }
    };

    debug!(
        entrypoint = %entrypoint.name,
        source = %source.display(),
        "Resolved entrypoint source"
    );

    if !is_inside(&source, &package.directory) {
        return Err(ValidationError::fatal(
            FatalReason::SourceOutsidePackage {
                config_source: entrypoint.config_source.clone(),
            },
            &entrypoint.name,
        ));
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_path_is_inside() {
        assert!(is_inside(
            Path::new("/repo/pkg-a/src/index.js"),
            Path::new("/repo/pkg-a")
        ));
    }

    #[test]
    fn directory_contains_itself() {
        assert!(is_inside(Path::new("/repo/pkg-a"), Path::new("/repo/pkg-a/")));
    }

    #[test]
    fn sibling_with_shared_prefix_is_outside() {
        assert!(!is_inside(
            Path::new("/repo/pkg-ab/src/index.js"),
            Path::new("/repo/pkg-a")
        ));
    }

    #[test]
    fn parent_components_are_folded() {
        assert!(!is_inside(
            Path::new("/repo/pkg-a/../pkg-b/src/index.js"),
            Path::new("/repo/pkg-a")
        ));
        assert!(is_inside(
            Path::new("/repo/pkg-a/src/../lib/./index.js"),
            Path::new("/repo/pkg-a")
        ));
    }
}
