//! Canonical entry-point field values.
//!
//! Every value is derived from the package's dist name, which is the package
//! name without its scope: `@scope/pkg` builds to `dist/pkg.cjs.js`.

use entrycheck_model::{FieldMap, ObjectField, StringField};

/// Package name with any scope prefix removed.
#[must_use]
pub fn dist_name(package_name: &str) -> &str {
    match package_name.rfind('/') {
        Some(idx) => &package_name[idx + 1..],
        None => package_name,
    }
}

/// The value a build writes to a string-shaped field.
#[must_use]
pub fn expected_string(field: StringField, package_name: &str) -> String {
    let name = dist_name(package_name);
    match field {
        StringField::Main => format!("dist/{name}.cjs.js"),
        StringField::Module => format!("dist/{name}.esm.js"),
        StringField::UmdMain => format!("dist/{name}.umd.min.js"),
    }
}

/// The alias map a build writes to an object-shaped field.
///
/// The CommonJS entry is always aliased; the ES-module entry only when the
/// entry-point publishes a `module` build.
#[must_use]
pub fn expected_object(field: ObjectField, package_name: &str, has_module_build: bool) -> FieldMap {
    let name = dist_name(package_name);
    let infix = field.dist_infix();

    let mut map = FieldMap::new();
    map.insert(
        format!("./dist/{name}.cjs.js"),
        format!("./dist/{name}.{infix}.cjs.js"),
    );
    if has_module_build {
        map.insert(
            format!("./dist/{name}.esm.js"),
            format!("./dist/{name}.{infix}.esm.js"),
        );
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dist_name_strips_scope() {
        assert_eq!(dist_name("my-pkg"), "my-pkg");
        assert_eq!(dist_name("@scope/my-pkg"), "my-pkg");
    }

    #[test]
    fn string_fields() {
        assert_eq!(expected_string(StringField::Main, "my-pkg"), "dist/my-pkg.cjs.js");
        assert_eq!(expected_string(StringField::Module, "my-pkg"), "dist/my-pkg.esm.js");
        assert_eq!(
            expected_string(StringField::UmdMain, "@scope/my-pkg"),
            "dist/my-pkg.umd.min.js"
        );
    }

    #[test]
    fn browser_without_module_build() {
        let map = expected_object(ObjectField::Browser, "my-pkg", false);
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            [("./dist/my-pkg.cjs.js", "./dist/my-pkg.browser.cjs.js")]
        );
    }

    #[test]
    fn react_native_with_module_build() {
        let map = expected_object(ObjectField::ReactNative, "my-pkg", true);
        let pairs: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(
            pairs,
            [
                ("./dist/my-pkg.cjs.js", "./dist/my-pkg.native.cjs.js"),
                ("./dist/my-pkg.esm.js", "./dist/my-pkg.native.esm.js"),
            ]
        );
    }
}
