//! Command-line front end for entrycheck.

pub mod exit_codes;

use std::path::Path;

use anyhow::{Context, Result};
use entrycheck_project::{FsResolver, Project};
use entrycheck_validate::{Notice, validate_project};
use tracing::info;

/// Loads the project at `directory` and validates every entry-point.
///
/// Load failures are returned with context; validation failures are returned
/// as the underlying `ValidationError` so callers can classify them.
pub fn validate_directory(directory: &Path, log: bool) -> Result<()> {
    let project = Project::load(directory)
        .with_context(|| format!("failed to load project at {}", directory.display()))?;
    if log {
        info!(
            packages = project.packages.len(),
            entrypoints = project.entrypoint_count(),
            "Validating project"
        );
    }

    validate_project(&project.packages, &FsResolver, log)?;
    if log {
        info!("{}", Notice::ValidProject);
    }
    Ok(())
}
