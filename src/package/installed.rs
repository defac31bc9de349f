//! Tracking of which packages are installed, and at which version.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::PackageError;

/// Mapping from package name to its single installed version.
///
/// Serialized as a plain JSON object so the state file stays readable.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct InstalledSet {
    records: BTreeMap<String, String>,
}

impl InstalledSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Installed packages as `(name, version)`, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }

    /// Record `name` as installed at `version`.
    ///
    /// Rejected when any version of `name` is already recorded, including the
    /// same one.
    pub fn mark_installed(&mut self, name: &str, version: &str) -> Result<(), PackageError> {
        if let Some(existing) = self.records.get(name) {
            return Err(PackageError::AlreadyInstalled {
                name: name.to_string(),
                version: existing.clone(),
            });
        }
        debug!("Recording {} {} as installed", name, version);
        self.records.insert(name.to_string(), version.to_string());
        Ok(())
    }

    /// Drop the record for `name`, returning the version it had.
    pub fn mark_uninstalled(&mut self, name: &str) -> Result<String, PackageError> {
        let version = self
            .records
            .remove(name)
            .ok_or_else(|| PackageError::NotInstalled {
                name: name.to_string(),
            })?;
        debug!("Removed installed record {} {}", name, version);
        Ok(version)
    }

    pub fn current_version(&self, name: &str) -> Result<&str, PackageError> {
        self.records
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| PackageError::NotInstalled {
                name: name.to_string(),
            })
    }
}
