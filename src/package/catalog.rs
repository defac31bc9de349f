//! The catalog of known package descriptors.

use log::debug;

use crate::error::PackageError;

use super::Package;

/// Ordered collection of package descriptors.
///
/// Entries keep insertion order and are never removed or changed in place.
/// Several entries may share a name, and even a `(name, version)` pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<Package>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.entries.iter()
    }

    /// Find the first entry named `name`.
    ///
    /// With a non-empty `version` the entry's version must match exactly.
    /// Without one the first entry by name wins; there is no "latest"
    /// ordering of versions.
    pub fn find(&self, name: &str, version: Option<&str>) -> Result<&Package, PackageError> {
        let version = version.filter(|v| !v.is_empty());

        self.entries
            .iter()
            .find(|pkg| pkg.name == name && version.is_none_or(|v| pkg.version == v))
            .ok_or_else(|| PackageError::NotFound {
                name: name.to_string(),
                version: version.map(String::from),
            })
    }

    /// All entries whose name contains `query`, in catalog order.
    pub fn search(&self, query: &str) -> Vec<&Package> {
        self.entries
            .iter()
            .filter(|pkg| pkg.name.contains(query))
            .collect()
    }

    /// Append a descriptor. No validation, no duplicate check.
    pub fn publish(&mut self, package: Package) {
        debug!(
            "Publishing {} version {} as entry #{}",
            package.name,
            package.version,
            self.entries.len()
        );
        self.entries.push(package);
    }
}

impl FromIterator<Package> for Catalog {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
