//! Error taxonomy for entry-point validation.

use entrycheck_model::{BuildType, ObjectField, StringField};
use thiserror::Error;

use crate::ResolveError;

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not repairable by rewriting the manifest.
    Fatal,
    /// A field holds a well-formed but wrong value.
    Fixable,
    /// Source resolution failed for a reason other than "not found".
    Resolve,
}

/// Why an entry-point failed validation in a way no rewrite can repair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalReason {
    #[error(
        "no source file was provided, please create a file at {config_source} or specify a custom source file with the source option"
    )]
    NoSource { config_source: String },

    #[error(
        "entrypoint source files must be inside their respective package directory but this entrypoint has specified its source file as {config_source}"
    )]
    SourceOutsidePackage { config_source: String },
}

impl FatalReason {
    /// Stable symbolic name of this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSource { .. } => "no-source",
            Self::SourceOutsidePackage { .. } => "source-outside-package",
        }
    }
}

/// A manifest field holding a value other than its computed expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FixableReason {
    #[error("main field is invalid")]
    InvalidMainField,

    #[error("module field is invalid")]
    InvalidModuleField,

    #[error("umd:main field is invalid")]
    InvalidUmdMainField,

    #[error(
        "the umd:main field is specified but a umdName option is not specified. please add it to the preconstruct config in package.json"
    )]
    UmdNameNotSpecified,

    #[error("browser field is invalid")]
    InvalidBrowserField,

    #[error("react-native field is invalid")]
    InvalidReactNativeField,
}

impl FixableReason {
    /// Stable symbolic name of this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidMainField => "invalid-main-field",
            Self::InvalidModuleField => "invalid-module-field",
            Self::InvalidUmdMainField => "invalid-umd-main-field",
            Self::UmdNameNotSpecified => "umd-name-not-specified",
            Self::InvalidBrowserField => "invalid-browser-field",
            Self::InvalidReactNativeField => "invalid-react-native-field",
        }
    }

    /// The manifest field a fix would rewrite.
    #[must_use]
    pub fn field(&self) -> BuildType {
        match self {
            Self::InvalidMainField => StringField::Main.into(),
            Self::InvalidModuleField => StringField::Module.into(),
            Self::InvalidUmdMainField | Self::UmdNameNotSpecified => StringField::UmdMain.into(),
            Self::InvalidBrowserField => ObjectField::Browser.into(),
            Self::InvalidReactNativeField => ObjectField::ReactNative.into(),
        }
    }

    pub(crate) fn invalid(field: BuildType) -> Self {
        match field {
            BuildType::String(StringField::Main) => Self::InvalidMainField,
            BuildType::String(StringField::Module) => Self::InvalidModuleField,
            BuildType::String(StringField::UmdMain) => Self::InvalidUmdMainField,
            BuildType::Object(ObjectField::Browser) => Self::InvalidBrowserField,
            BuildType::Object(ObjectField::ReactNative) => Self::InvalidReactNativeField,
        }
    }
}

/// The first violation found while validating an entry-point.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{entrypoint}: {reason}")]
    Fatal {
        reason: FatalReason,
        entrypoint: String,
    },

    #[error("{entrypoint}: {reason}")]
    Fixable {
        reason: FixableReason,
        entrypoint: String,
    },

    #[error("{entrypoint}: {source}")]
    Resolve {
        source: ResolveError,
        entrypoint: String,
    },
}

impl ValidationError {
    pub(crate) fn fatal(reason: FatalReason, entrypoint: &str) -> Self {
        Self::Fatal {
            reason,
            entrypoint: entrypoint.to_owned(),
        }
    }

    pub(crate) fn fixable(reason: FixableReason, entrypoint: &str) -> Self {
        Self::Fixable {
            reason,
            entrypoint: entrypoint.to_owned(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Fatal { .. } => ErrorKind::Fatal,
            Self::Fixable { .. } => ErrorKind::Fixable,
            Self::Resolve { .. } => ErrorKind::Resolve,
        }
    }

    /// Symbolic name of the violation, or `"resolve-failed"` for resolver errors.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fatal { reason, .. } => reason.code(),
            Self::Fixable { reason, .. } => reason.code(),
            Self::Resolve { .. } => "resolve-failed",
        }
    }

    /// Name of the entry-point the error is attributed to.
    #[must_use]
    pub fn entrypoint(&self) -> &str {
        match self {
            Self::Fatal { entrypoint, .. }
            | Self::Fixable { entrypoint, .. }
            | Self::Resolve { entrypoint, .. } => entrypoint,
        }
    }

    #[must_use]
    pub fn fixable_reason(&self) -> Option<FixableReason> {
        match self {
            Self::Fixable { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixable_reason_round_trips_through_field() {
        for reason in [
            FixableReason::InvalidMainField,
            FixableReason::InvalidModuleField,
            FixableReason::InvalidUmdMainField,
            FixableReason::InvalidBrowserField,
            FixableReason::InvalidReactNativeField,
        ] {
            assert_eq!(FixableReason::invalid(reason.field()), reason);
        }
    }

    #[test]
    fn umd_name_reason_targets_umd_main() {
        assert_eq!(
            FixableReason::UmdNameNotSpecified.field(),
            BuildType::String(StringField::UmdMain)
        );
    }
}
