//! Decision half of `update`: what, if anything, should replace the
//! installed version.

use crate::error::PackageError;

use super::{Catalog, InstalledSet, Package};

/// Outcome of comparing the installed version with the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePlan {
    /// The catalog's first entry already matches what is installed.
    Current { version: String },
    /// Uninstall `from`, then install `to`.
    Replace { from: String, to: Package },
}

/// Decide how to update `name`.
///
/// The target is the first catalog entry for `name`; with no version
/// ranking, insertion order is what makes an entry "latest".
pub fn plan_update(
    catalog: &Catalog,
    installed: &InstalledSet,
    name: &str,
) -> Result<UpdatePlan, PackageError> {
    let current = installed.current_version(name)?;
    let latest = catalog.find(name, None)?;

    if latest.version == current {
        Ok(UpdatePlan::Current {
            version: current.to_string(),
        })
    } else {
        Ok(UpdatePlan::Replace {
            from: current.to_string(),
            to: latest.clone(),
        })
    }
}
