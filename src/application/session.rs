//! Session - owns the catalog and installed set and runs the shell's intents.
//!
//! Each operation resolves against the catalog, consults the installed set,
//! hands at most one command to the runtime and only then records the
//! result. With a [`StateStore`] attached the installed set is saved after
//! every change.

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::error::PackageError;
use crate::installer::{InstallMode, install_invocation, uninstall_invocation};
use crate::package::{Catalog, InstalledSet, Package, UpdatePlan, codec, plan_update};
use crate::runtime::Runtime;

use super::StateStore;

/// Result of an `update` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    AlreadyCurrent { version: String },
    Updated { from: String, to: String },
}

pub struct Session<'a, R: Runtime> {
    runtime: &'a R,
    catalog: Catalog,
    installed: InstalledSet,
    state: Option<StateStore<'a, R>>,
}

impl<'a, R: Runtime> Session<'a, R> {
    /// An in-memory session with nothing installed.
    pub fn new(runtime: &'a R, catalog: Catalog) -> Self {
        Self {
            runtime,
            catalog,
            installed: InstalledSet::new(),
            state: None,
        }
    }

    /// A session whose installed set is loaded from, and saved to, `state`.
    pub fn persistent(runtime: &'a R, catalog: Catalog, state: StateStore<'a, R>) -> Result<Self> {
        let installed = state.load()?;
        debug!(
            "Loaded {} installed package(s) from {:?}",
            installed.len(),
            state.path()
        );
        Ok(Self {
            runtime,
            catalog,
            installed,
            state: Some(state),
        })
    }

    pub fn with_installed(mut self, installed: InstalledSet) -> Self {
        self.installed = installed;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn installed(&self) -> &InstalledSet {
        &self.installed
    }

    fn save_state(&self) -> Result<()> {
        match &self.state {
            Some(store) => store.save(&self.installed),
            None => Ok(()),
        }
    }

    /// Install `name`, optionally at an exact `version`.
    ///
    /// The installed set is only touched once the external installer has
    /// succeeded.
    #[tracing::instrument(skip(self))]
    pub fn install(&mut self, name: &str, version: Option<&str>, mode: InstallMode) -> Result<Package> {
        let package = self.catalog.find(name, version)?.clone();

        if let Ok(installed) = self.installed.current_version(name) {
            return Err(PackageError::AlreadyInstalled {
                name: name.to_string(),
                version: installed.to_string(),
            }
            .into());
        }

        let invocation = install_invocation(&package, mode)?;
        info!("Installing {} version {} via {}", package.name, package.version, invocation);

        self.runtime
            .run(&invocation.program, &invocation.args)
            .map_err(|e| PackageError::Installation {
                name: name.to_string(),
                reason: format!("{:#}", e),
            })?;

        self.installed.mark_installed(name, &package.version)?;
        self.save_state()?;
        Ok(package)
    }

    /// Uninstall `name`, returning the version that was installed.
    #[tracing::instrument(skip(self))]
    pub fn uninstall(&mut self, name: &str, mode: InstallMode) -> Result<String> {
        self.installed.current_version(name)?;

        let invocation = uninstall_invocation(name, mode);
        info!("Uninstalling {} via {}", name, invocation);

        self.runtime
            .run(&invocation.program, &invocation.args)
            .map_err(|e| PackageError::Uninstallation {
                name: name.to_string(),
                reason: format!("{:#}", e),
            })?;

        let version = self.installed.mark_uninstalled(name)?;
        self.save_state()?;
        Ok(version)
    }

    /// Replace the installed version of `name` with the catalog's first entry.
    ///
    /// This is an uninstall followed by an install, not an atomic swap: when
    /// the install half fails the package is left uninstalled.
    #[tracing::instrument(skip(self))]
    pub fn update(&mut self, name: &str) -> Result<UpdateOutcome> {
        match plan_update(&self.catalog, &self.installed, name)? {
            UpdatePlan::Current { version } => Ok(UpdateOutcome::AlreadyCurrent { version }),
            UpdatePlan::Replace { from, to } => {
                debug!("Updating {} from {} to {}", name, from, to.version);
                self.uninstall(name, InstallMode::Default)?;
                let installed = self.install(name, Some(&to.version), InstallMode::Default)?;
                Ok(UpdateOutcome::Updated {
                    from,
                    to: installed.version,
                })
            }
        }
    }

    pub fn search(&self, query: &str) -> Vec<&Package> {
        self.catalog.search(query)
    }

    /// Read a descriptor file and append it to the catalog.
    #[tracing::instrument(skip(self))]
    pub fn publish(&mut self, path: &Path) -> Result<Package> {
        let content = self
            .runtime
            .read_to_string(path)
            .with_context(|| format!("Error reading file {}", path.display()))?;

        let package = codec::decode(&content);
        self.catalog.publish(package.clone());
        Ok(package)
    }

    /// Append a newly authored package and write its descriptor to `out`.
    ///
    /// The catalog entry is kept even if writing the file fails.
    #[tracing::instrument(skip(self, package))]
    pub fn create(&mut self, package: Package, out: &Path) -> Result<()> {
        let content = codec::encode(&package);
        self.catalog.publish(package);

        self.runtime
            .write(out, content.as_bytes())
            .with_context(|| format!("Error saving {}", out.display()))
    }

    /// Run an arbitrary command attached to the terminal.
    #[tracing::instrument(skip(self))]
    pub fn use_command(&self, program: &str, args: &[String]) -> Result<()> {
        self.runtime.run_interactive(program, args)
    }
}
