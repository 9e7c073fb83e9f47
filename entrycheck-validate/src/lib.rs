//! Entry-point field validation for entrycheck.
//!
//! Checks that a package's published entry-point fields (`main`, `module`,
//! `umd:main`, `browser`, `react-native`) hold exactly the values a build would
//! write for that package, and that each entry-point's source file lives
//! inside its package.
//!
//! # Structure
//!
//! - [`expect`] computes the single canonical value of each field from the
//!   package name and which builds exist
//! - [`judge`] decides whether a manifest value matches its expectation
//! - [`source`] resolves the configured source and checks containment
//! - [`validate_entrypoint`] runs the checks in a fixed order and stops at the
//!   first violation
//!
//! # Errors
//!
//! A violation is either [`ErrorKind::Fatal`] (cannot be repaired by rewriting
//! the manifest) or [`ErrorKind::Fixable`] (the field can be rewritten to its
//! expected value). Only the first violation of an entry-point is reported.

mod error;
pub mod expect;
pub mod judge;
mod messages;
mod project;
mod resolve;
pub mod source;
mod validator;

pub use error::{ErrorKind, FatalReason, FixableReason, ValidationError, ValidationResult};
pub use messages::Notice;
pub use project::{validate_package, validate_project};
pub use resolve::{ResolveError, ResolveResult, SourceResolver};
pub use validator::validate_entrypoint;
