use serde::{Deserialize, Serialize};

/// One catalog entry: a single version of a package and how to install it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    pub name: String,
    /// Free-form; only ever compared for equality.
    pub version: String,
    /// Local installer path or remote URL, depending on the install mode.
    pub installation: String,
    pub description: String,
    /// Shell-style command line run by the default install mode.
    pub install: String,
    pub section: String,
}

impl Package {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn with_installation(mut self, installation: impl Into<String>) -> Self {
        self.installation = installation.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_install(mut self, install: impl Into<String>) -> Self {
        self.install = install.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.version, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_fields() {
        let pkg = Package::new("foo", "1.0")
            .with_installation("https://example.com/foo.git")
            .with_description("Foo tool")
            .with_install("setup.exe /S")
            .with_section("utils");

        assert_eq!(pkg.name, "foo");
        assert_eq!(pkg.version, "1.0");
        assert_eq!(pkg.installation, "https://example.com/foo.git");
        assert_eq!(pkg.description, "Foo tool");
        assert_eq!(pkg.install, "setup.exe /S");
        assert_eq!(pkg.section, "utils");
    }

    #[test]
    fn test_display_is_search_line() {
        let pkg = Package::new("foo", "1.0").with_description("Foo tool");
        assert_eq!(pkg.to_string(), "foo (1.0) - Foo tool");
    }
}
