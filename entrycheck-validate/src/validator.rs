//! Ordered entry-point checklist.

use entrycheck_model::{BuildType, Entrypoint, ObjectField, Package, StringField};
use tracing::info;

use crate::judge::is_field_valid;
use crate::source::check_source;
use crate::{FixableReason, Notice, SourceResolver, ValidationError, ValidationResult};

/// Validates one entry-point of `package`, returning the first violation.
///
/// Checks run in this order and stop at the first failure:
/// 1. the source resolves to a file inside the package (fatal)
/// 2. `main`
/// 3. `module`, if present
/// 4. `umd:main`, if present, then the `umdName` option it requires
/// 5. `browser`, if present
/// 6. `react-native`, if present
///
/// With `log` set, a notice is emitted for every check that passes.
pub fn validate_entrypoint(
    package: &Package,
    entrypoint: &Entrypoint,
    resolver: &dyn SourceResolver,
    log: bool,
) -> ValidationResult<()> {
    let notice = |message: Notice| {
        if log {
            info!(entrypoint = %entrypoint.name, "{message}");
        }
    };
    let check = |field: BuildType| {
        if is_field_valid(entrypoint, &package.name, field) {
            Ok(())
        } else {
            Err(ValidationError::fixable(
                FixableReason::invalid(field),
                &entrypoint.name,
            ))
        }
    };

    check_source(package, entrypoint, resolver)?;
    notice(Notice::ValidEntrypoint);

    check(StringField::Main.into())?;
    notice(StringField::Main.into());

    if entrypoint.module.is_some() {
        check(StringField::Module.into())?;
        notice(StringField::Module.into());
    }

    if entrypoint.umd_main.is_some() {
        check(StringField::UmdMain.into())?;
        if entrypoint.config.umd_name().is_none() {
            return Err(ValidationError::fixable(
                FixableReason::UmdNameNotSpecified,
                &entrypoint.name,
            ));
        }
        notice(StringField::UmdMain.into());
    }

    if entrypoint.browser.is_some() {
        check(ObjectField::Browser.into())?;
        notice(ObjectField::Browser.into());
    }

    if entrypoint.react_native.is_some() {
        check(ObjectField::ReactNative.into())?;
        notice(ObjectField::ReactNative.into());
    }

    Ok(())
}
