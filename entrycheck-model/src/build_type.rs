use std::fmt;

/// A manifest field whose canonical value is a single relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringField {
    /// CommonJS entry (`main`).
    Main,
    /// ES-module entry (`module`).
    Module,
    /// Minified UMD bundle (`umd:main`).
    UmdMain,
}

impl StringField {
    pub const ALL: [StringField; 3] = [Self::Main, Self::Module, Self::UmdMain];

    /// The key this field is stored under in `package.json`.
    #[must_use]
    pub fn manifest_key(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Module => "module",
            Self::UmdMain => "umd:main",
        }
    }
}

/// A manifest field whose canonical value is a path-to-path mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectField {
    /// Bundler alias map for browser builds (`browser`).
    Browser,
    /// Alias map for React Native builds (`react-native`).
    ReactNative,
}

impl ObjectField {
    pub const ALL: [ObjectField; 2] = [Self::Browser, Self::ReactNative];

    /// The key this field is stored under in `package.json`.
    #[must_use]
    pub fn manifest_key(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::ReactNative => "react-native",
        }
    }

    /// Infix placed before the format suffix of built files (`pkg.browser.cjs.js`).
    #[must_use]
    pub fn dist_infix(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::ReactNative => "native",
        }
    }
}

/// Any entry-point field an expected value can be computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildType {
    String(StringField),
    Object(ObjectField),
}

impl BuildType {
    /// All build types, in validation order.
    pub const ALL: [BuildType; 5] = [
        Self::String(StringField::Main),
        Self::String(StringField::Module),
        Self::String(StringField::UmdMain),
        Self::Object(ObjectField::Browser),
        Self::Object(ObjectField::ReactNative),
    ];

    #[must_use]
    pub fn manifest_key(self) -> &'static str {
        match self {
            Self::String(field) => field.manifest_key(),
            Self::Object(field) => field.manifest_key(),
        }
    }
}

impl From<StringField> for BuildType {
    fn from(field: StringField) -> Self {
        Self::String(field)
    }
}

impl From<ObjectField> for BuildType {
    fn from(field: ObjectField) -> Self {
        Self::Object(field)
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.manifest_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_keys() {
        let keys: Vec<_> = BuildType::ALL.iter().map(|b| b.manifest_key()).collect();
        assert_eq!(keys, ["main", "module", "umd:main", "browser", "react-native"]);
    }

    #[test]
    fn display_uses_manifest_key() {
        assert_eq!(BuildType::from(StringField::UmdMain).to_string(), "umd:main");
        assert_eq!(BuildType::from(ObjectField::ReactNative).to_string(), "react-native");
    }
}
