//! Error types for catalog, installed-set and descriptor operations.

use thiserror::Error;

/// Failures of the package registry and its installer hand-off.
///
/// Every variant carries the package name so callers can branch on the kind
/// and still report which package was involved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackageError {
    #[error("package not found: {name}{}", version_suffix(.version))]
    NotFound {
        name: String,
        version: Option<String>,
    },

    #[error("Package already installed: {name} (version {version})")]
    AlreadyInstalled { name: String, version: String },

    #[error("Package not installed: {name}")]
    NotInstalled { name: String },

    #[error("installation of {name} failed: {reason}")]
    Installation { name: String, reason: String },

    #[error("uninstallation of {name} failed: {reason}")]
    Uninstallation { name: String, reason: String },
}

fn version_suffix(version: &Option<String>) -> String {
    match version {
        Some(v) => format!(" (version {})", v),
        None => String::new(),
    }
}

/// Failures of the strict descriptor decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("descriptor is missing the *{0}*: line")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_without_version() {
        let err = PackageError::NotFound {
            name: "foo".into(),
            version: None,
        };
        assert_eq!(err.to_string(), "package not found: foo");
    }

    #[test]
    fn test_not_found_message_with_version() {
        let err = PackageError::NotFound {
            name: "foo".into(),
            version: Some("2.0".into()),
        };
        assert_eq!(err.to_string(), "package not found: foo (version 2.0)");
    }

    #[test]
    fn test_package_error_converts_to_anyhow() {
        let err: anyhow::Error = PackageError::NotInstalled { name: "foo".into() }.into();
        assert_eq!(
            err.downcast_ref::<PackageError>(),
            Some(&PackageError::NotInstalled { name: "foo".into() })
        );
    }
}
