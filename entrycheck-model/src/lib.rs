//! Package and entry-point model for entrycheck.
//!
//! Defines the plain data that the validation engine reads:
//! - [`Package`] — a package's name, root directory and its entry-points
//! - [`Entrypoint`] — one build target of a package and its manifest fields
//! - [`FieldValue`] — the string-or-mapping shape of `browser` / `react-native`
//! - [`BuildType`] — which manifest field an expected value is computed for
//!
//! Values of these types are immutable snapshots of the manifests on disk.
//! Loading them is the job of `entrycheck-project`; validating them is the job
//! of `entrycheck-validate`.

mod build_type;
mod entrypoint;
mod field;
mod manifest;
mod package;

pub use build_type::{BuildType, ObjectField, StringField};
pub use entrypoint::{DEFAULT_SOURCE, Entrypoint};
pub use field::{FieldMap, FieldValue};
pub use manifest::{EntrypointConfig, Manifest};
pub use package::Package;
