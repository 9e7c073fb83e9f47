//! Project discovery and source resolution for entrycheck.
//!
//! Reads `package.json` manifests from disk and builds the [`Package`] and
//! [`Entrypoint`] snapshots that `entrycheck-validate` checks.
//!
//! # Layout
//!
//! The root manifest may list package directories as glob patterns:
//!
//! ```json
//! { "preconstruct": { "packages": ["packages/*"] } }
//! ```
//!
//! Without that list the root itself is the only package. Each package may
//! list extra entry-point directories (`"entrypoints": [".", "utils"]`), each
//! holding its own `package.json`.
//!
//! [`Package`]: entrycheck_model::Package
//! [`Entrypoint`]: entrycheck_model::Entrypoint

mod error;
mod options;
mod project;
mod resolver;

pub use error::{ProjectError, ProjectResult};
pub use project::{MANIFEST_FILE, Project};
pub use resolver::{EXTENSIONS, FsResolver};
