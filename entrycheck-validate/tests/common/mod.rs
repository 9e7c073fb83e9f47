//! Shared test helpers for validation tests.

#![allow(dead_code)]

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use entrycheck_model::{Entrypoint, Package};
use entrycheck_validate::{ResolveError, ResolveResult};

pub const PACKAGE_DIR: &str = "/repo/my-pkg";

/// Resolves every request to `<base_dir>/src/index.js`.
pub fn in_place(_request: &str, base_dir: &Path) -> ResolveResult<PathBuf> {
    Ok(base_dir.join("src/index.js"))
}

/// Resolves every request to a fixed absolute path.
pub fn fixed(
    path: &'static str,
) -> impl Fn(&str, &Path) -> ResolveResult<PathBuf> + Send + Sync {
    move |_: &str, _: &Path| -> ResolveResult<PathBuf> { Ok(PathBuf::from(path)) }
}

/// Never finds anything.
pub fn missing(request: &str, base_dir: &Path) -> ResolveResult<PathBuf> {
    Err(ResolveError::NotFound {
        request: request.to_owned(),
        base_dir: base_dir.to_owned(),
    })
}

pub fn package() -> Package {
    Package::new("my-pkg", PACKAGE_DIR)
}

/// A root entry-point of `my-pkg` with a correct `main` and nothing else.
pub fn valid_entrypoint() -> Entrypoint {
    Entrypoint::new("my-pkg", PACKAGE_DIR).with_main("dist/my-pkg.cjs.js")
}

/// Writer that appends formatted log lines to a shared buffer.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under an INFO-level subscriber and returns what it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.0.lock().unwrap().clone();
    (result, String::from_utf8(bytes).unwrap())
}
