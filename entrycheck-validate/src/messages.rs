use std::fmt;

use entrycheck_model::{BuildType, ObjectField, StringField};

/// Informational notice emitted for each check that passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    ValidEntrypoint,
    ValidField(BuildType),
    ValidPackageEntrypoints,
    ValidProject,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidEntrypoint => f.write_str("a valid entry point exists."),
            Self::ValidField(field) => write!(f, "{field} field is valid"),
            Self::ValidPackageEntrypoints => f.write_str("package entrypoints are valid"),
            Self::ValidProject => f.write_str("project is valid!"),
        }
    }
}

impl From<StringField> for Notice {
    fn from(field: StringField) -> Self {
        Self::ValidField(field.into())
    }
}

impl From<ObjectField> for Notice {
    fn from(field: ObjectField) -> Self {
        Self::ValidField(field.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_notices() {
        assert_eq!(Notice::from(StringField::Main).to_string(), "main field is valid");
        assert_eq!(
            Notice::from(StringField::UmdMain).to_string(),
            "umd:main field is valid"
        );
        assert_eq!(
            Notice::from(ObjectField::ReactNative).to_string(),
            "react-native field is valid"
        );
    }
}
