//! Resolved configuration for a shell run.

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// File name used for descriptors written by `create`.
pub const DESCRIPTOR_FILE: &str = "winpkg.infoi";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// State directory, `~/.winpkg` unless overridden.
    pub root: PathBuf,
    /// Descriptors in here seed the catalog at start.
    pub catalog_dir: PathBuf,
    /// Installed set, as JSON.
    pub state_path: PathBuf,
    /// Where `create` writes the new descriptor.
    pub descriptor_path: PathBuf,
    /// Extra descriptor files to seed after the catalog directory.
    pub seed_files: Vec<PathBuf>,
    /// Offer to author a package when the catalog starts out empty.
    pub prompt_on_empty: bool,
}

impl Config {
    pub fn new<R: Runtime>(
        runtime: &R,
        root: Option<PathBuf>,
        seed_files: Vec<PathBuf>,
        prompt_on_empty: bool,
    ) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => default_root(runtime)?,
        };
        let descriptor_path = runtime.current_dir()?.join(DESCRIPTOR_FILE);

        debug!("Using root {:?}", root);

        Ok(Self {
            catalog_dir: root.join("catalog"),
            state_path: root.join("installed.json"),
            root,
            descriptor_path,
            seed_files,
            prompt_on_empty,
        })
    }
}

/// Default state directory: `<home>/.winpkg`.
#[tracing::instrument(skip(runtime))]
pub fn default_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let home_dir = runtime
        .home_dir()
        .context("Could not find home directory")?;
    Ok(home_dir.join(".winpkg"))
}
