//! Filesystem source resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use entrycheck_validate::{ResolveError, ResolveResult, SourceResolver};

/// Extensions tried, in order, for an extensionless source request.
pub const EXTENSIONS: &[&str] = &[".js", ".jsx", ".mjs", ".cjs", ".ts", ".tsx", ".json"];

/// Resolves relative source requests the way a JavaScript module resolver
/// does: the exact file, then with each of [`EXTENSIONS`], then the
/// directory's `index` file with each extension.
///
/// Resolved paths are canonical so they compare against canonical package
/// directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsResolver;

impl FsResolver {
    fn candidates(target: &Path) -> impl Iterator<Item = PathBuf> + '_ {
        let with_extension = EXTENSIONS.iter().map(move |ext| {
            let mut path = target.as_os_str().to_owned();
            path.push(ext);
            PathBuf::from(path)
        });
        let index = EXTENSIONS
            .iter()
            .map(move |ext| target.join(format!("index{ext}")));
        std::iter::once(target.to_owned())
            .chain(with_extension)
            .chain(index)
    }
}

impl SourceResolver for FsResolver {
    fn resolve(&self, request: &str, base_dir: &Path) -> ResolveResult<PathBuf> {
        let target = base_dir.join(request);
        let io_error = |source: io::Error| ResolveError::Io {
            request: request.to_owned(),
            source,
        };

        for candidate in Self::candidates(&target) {
            match fs::metadata(&candidate) {
                Ok(meta) if meta.is_file() => {
                    return fs::canonicalize(&candidate).map_err(io_error);
                }
                Ok(_) => {}
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                    ) => {}
                Err(e) => return Err(io_error(e)),
            }
        }

        Err(ResolveError::NotFound {
            request: request.to_owned(),
            base_dir: base_dir.to_owned(),
        })
    }
}
