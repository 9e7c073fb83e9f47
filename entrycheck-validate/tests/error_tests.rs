use std::path::PathBuf;

use entrycheck_validate::{FatalReason, FixableReason, Notice, ResolveError};

#[test]
fn fixable_codes_are_stable() {
    let codes: Vec<_> = [
        FixableReason::InvalidMainField,
        FixableReason::InvalidModuleField,
        FixableReason::InvalidUmdMainField,
        FixableReason::UmdNameNotSpecified,
        FixableReason::InvalidBrowserField,
        FixableReason::InvalidReactNativeField,
    ]
    .iter()
    .map(FixableReason::code)
    .collect();

    assert_eq!(
        codes,
        [
            "invalid-main-field",
            "invalid-module-field",
            "invalid-umd-main-field",
            "umd-name-not-specified",
            "invalid-browser-field",
            "invalid-react-native-field",
        ]
    );
}

#[test]
fn fixable_messages_name_the_field() {
    assert_eq!(FixableReason::InvalidMainField.to_string(), "main field is invalid");
    assert_eq!(
        FixableReason::InvalidUmdMainField.to_string(),
        "umd:main field is invalid"
    );
    assert_eq!(
        FixableReason::InvalidReactNativeField.to_string(),
        "react-native field is invalid"
    );
    assert!(FixableReason::UmdNameNotSpecified.to_string().contains("umdName"));
}

#[test]
fn fatal_messages_include_configured_source() {
    let no_source = FatalReason::NoSource {
        config_source: "src/index".into(),
    };
    assert_eq!(no_source.code(), "no-source");
    assert!(no_source.to_string().contains("create a file at src/index"));

    let outside = FatalReason::SourceOutsidePackage {
        config_source: "../other/src/index.js".into(),
    };
    assert_eq!(outside.code(), "source-outside-package");
    assert!(outside.to_string().ends_with("as ../other/src/index.js"));
}

#[test]
fn resolve_not_found_display() {
    let err = ResolveError::NotFound {
        request: "src/index".into(),
        base_dir: PathBuf::from("/repo/pkg"),
    };
    assert_eq!(
        err.to_string(),
        "cannot find module 'src/index' from '/repo/pkg'"
    );
}

#[test]
fn notices() {
    assert_eq!(Notice::ValidEntrypoint.to_string(), "a valid entry point exists.");
    assert_eq!(
        Notice::ValidPackageEntrypoints.to_string(),
        "package entrypoints are valid"
    );
    assert_eq!(Notice::ValidProject.to_string(), "project is valid!");
}
