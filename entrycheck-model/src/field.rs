use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Path-to-path alias mapping, kept in manifest order.
pub type FieldMap = IndexMap<String, String>;

/// Value of an object-shaped manifest field (`browser`, `react-native`).
///
/// `package.json` allows either a single replacement path or an alias map.
/// Only the mapping form is ever produced by a build, so `Single` values are
/// always invalid for these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Mapped(FieldMap),
}

impl FieldValue {
    #[must_use]
    pub fn as_mapped(&self) -> Option<&FieldMap> {
        match self {
            Self::Mapped(map) => Some(map),
            Self::Single(_) => None,
        }
    }

    #[must_use]
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<FieldMap> for FieldValue {
    fn from(map: FieldMap) -> Self {
        Self::Mapped(map)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for FieldValue {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self::Mapped(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect(),
        )
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value:?}"),
            Self::Mapped(map) => {
                f.write_str("{")?;
                for (i, (from, to)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{from:?}: {to:?}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mapped_keeps_order() {
        let value = FieldValue::from([("./b.js", "./b2.js"), ("./a.js", "./a2.js")]);
        assert_eq!(
            value.to_string(),
            r#"{"./b.js": "./b2.js", "./a.js": "./a2.js"}"#
        );
    }

    #[test]
    fn single_is_not_mapped() {
        let value = FieldValue::from("./dist/pkg.browser.cjs.js");
        assert!(value.is_single());
        assert!(value.as_mapped().is_none());
    }
}
