//! Equality rules for deciding whether a field holds its expected value.

use entrycheck_model::{BuildType, Entrypoint, FieldMap, FieldValue, ObjectField, StringField};

use crate::expect::{expected_object, expected_string};

/// String-shaped fields must match exactly.
#[must_use]
pub fn is_valid_string(actual: &str, expected: &str) -> bool {
    actual == expected
}

/// Object-shaped fields must be a mapping structurally equal to the
/// expectation. A single string is never valid, whatever it contains.
#[must_use]
pub fn is_valid_object(actual: &FieldValue, expected: &FieldMap) -> bool {
    match actual {
        FieldValue::Single(_) => false,
        FieldValue::Mapped(map) => maps_equal(map, expected),
    }
}

/// Deep equality over field values, ignoring mapping key order.
#[must_use]
pub fn structurally_equal(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Single(a), FieldValue::Single(b)) => a == b,
        (FieldValue::Mapped(a), FieldValue::Mapped(b)) => maps_equal(a, b),
        _ => false,
    }
}

fn maps_equal(a: &FieldMap, b: &FieldMap) -> bool {
    a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
}

/// Whether `field` of `entrypoint` holds the value a build of `package_name`
/// would write. An absent field is never valid.
#[must_use]
pub fn is_field_valid(entrypoint: &Entrypoint, package_name: &str, field: BuildType) -> bool {
    match field {
        BuildType::String(field) => {
            let actual = match field {
                StringField::Main => entrypoint.main.as_deref(),
                StringField::Module => entrypoint.module.as_deref(),
                StringField::UmdMain => entrypoint.umd_main.as_deref(),
            };
            actual.is_some_and(|actual| {
                is_valid_string(actual, &expected_string(field, package_name))
            })
        }
        BuildType::Object(field) => {
            let actual = match field {
                ObjectField::Browser => entrypoint.browser.as_ref(),
                ObjectField::ReactNative => entrypoint.react_native.as_ref(),
            };
            actual.is_some_and(|actual| {
                let expected = expected_object(field, package_name, entrypoint.has_module_build());
                is_valid_object(actual, &expected)
            })
        }
    }
}
