//! Package registry: descriptors, the catalog, the installed set and the
//! descriptor text format.

mod catalog;
pub mod codec;
mod descriptor;
mod installed;
mod update;

pub use catalog::Catalog;
pub use descriptor::Package;
pub use installed::InstalledSet;
pub use update::{UpdatePlan, plan_update};
