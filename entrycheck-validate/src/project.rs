use entrycheck_model::Package;
use tracing::info;

use crate::{Notice, SourceResolver, ValidationResult, validate_entrypoint};

/// Validates every entry-point of `package` in declaration order.
pub fn validate_package(
    package: &Package,
    resolver: &dyn SourceResolver,
    log: bool,
) -> ValidationResult<()> {
    for entrypoint in &package.entrypoints {
        validate_entrypoint(package, entrypoint, resolver, log)?;
    }
    if log {
        info!(package = %package.name, "{}", Notice::ValidPackageEntrypoints);
    }
    Ok(())
}

/// Validates every package in order, stopping at the first violation.
pub fn validate_project(
    packages: &[Package],
    resolver: &dyn SourceResolver,
    log: bool,
) -> ValidationResult<()> {
    for package in packages {
        validate_package(package, resolver, log)?;
    }
    Ok(())
}
