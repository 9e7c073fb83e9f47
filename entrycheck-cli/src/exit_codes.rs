//! Process exit codes.
//!
//! - **0**: every entry-point is valid
//! - **1**: a field holds a wrong value that a rewrite would fix
//! - **2**: a fatal violation, or the project could not be loaded

use entrycheck_validate::{ErrorKind, ValidationError};

pub mod codes {
    pub const SUCCESS: u8 = 0;

    /// A manifest field is wrong but well-formed.
    pub const FIXABLE: u8 = 1;

    /// Fatal violation, load failure or resolver failure.
    pub const FATAL: u8 = 2;
}

/// Maps an error returned by [`crate::validate_directory`] to an exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ValidationError>().map(ValidationError::kind) {
        Some(ErrorKind::Fixable) => codes::FIXABLE,
        _ => codes::FATAL,
    }
}
