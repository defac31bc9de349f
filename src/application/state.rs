//! Installed-set persistence.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use crate::package::InstalledSet;
use crate::runtime::Runtime;

/// Loads and saves the installed set as a JSON state file.
pub struct StateStore<'a, R: Runtime> {
    runtime: &'a R,
    path: PathBuf,
}

impl<'a, R: Runtime> StateStore<'a, R> {
    pub fn new(runtime: &'a R, path: PathBuf) -> Self {
        Self { runtime, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the installed set. A missing state file means nothing is installed.
    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> Result<InstalledSet> {
        if !self.runtime.exists(&self.path) {
            debug!("No state file at {:?}, starting empty", self.path);
            return Ok(InstalledSet::new());
        }

        let content = self.runtime.read_to_string(&self.path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse installed state {:?}", self.path))
    }

    pub fn save(&self, installed: &InstalledSet) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !self.runtime.exists(parent)
        {
            self.runtime.create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(installed)?;
        self.runtime
            .write(&self.path, content.as_bytes())
            .with_context(|| format!("Failed to save installed state to {:?}", self.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;

    fn state_path() -> PathBuf {
        PathBuf::from("/home/user/.winpkg/installed.json")
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(state_path()))
            .returning(|_| false);

        let store = StateStore::new(&runtime, state_path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_existing_file() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(state_path()))
            .returning(|_| true);
        runtime
            .expect_read_to_string()
            .with(eq(state_path()))
            .returning(|_| Ok(r#"{"foo": "1.0", "bar": "0.2"}"#.to_string()));

        let store = StateStore::new(&runtime, state_path());
        let installed = store.load().unwrap();
        assert_eq!(installed.current_version("foo").unwrap(), "1.0");
        assert_eq!(installed.current_version("bar").unwrap(), "0.2");
    }

    #[test]
    fn test_load_corrupt_file() {
        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));

        let store = StateStore::new(&runtime, state_path());
        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse installed state"));
    }

    #[test]
    fn test_save_creates_parent_and_writes_json() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_exists()
            .with(eq(PathBuf::from("/home/user/.winpkg")))
            .returning(|_| false);
        runtime
            .expect_create_dir_all()
            .with(eq(PathBuf::from("/home/user/.winpkg")))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_write()
            .withf(|path, contents| {
                path == state_path()
                    && serde_json::from_slice::<serde_json::Value>(contents).unwrap()
                        == serde_json::json!({"foo": "1.0"})
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut installed = InstalledSet::new();
        installed.mark_installed("foo", "1.0").unwrap();

        let store = StateStore::new(&runtime, state_path());
        store.save(&installed).unwrap();
    }
}
