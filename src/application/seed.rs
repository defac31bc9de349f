//! Catalog seeding from descriptor files.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::package::{Catalog, codec};
use crate::runtime::Runtime;

/// File extension of package descriptors.
pub const DESCRIPTOR_EXTENSION: &str = "infoi";

/// Find all descriptor files directly inside `dir`, sorted by path.
#[tracing::instrument(skip(runtime))]
pub fn find_descriptor_files<R: Runtime>(runtime: &R, dir: &Path) -> Result<Vec<PathBuf>> {
    if !runtime.exists(dir) {
        return Ok(vec![]);
    }

    let mut files: Vec<PathBuf> = runtime
        .read_dir(dir)?
        .into_iter()
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == DESCRIPTOR_EXTENSION) && !runtime.is_dir(path)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Build the start-up catalog.
///
/// Descriptors in `catalog_dir` come first, in file name order; an unreadable
/// one is skipped with a warning. `extra` files were named explicitly, so
/// failing to read one of them is an error.
pub fn load_catalog<R: Runtime>(runtime: &R, catalog_dir: &Path, extra: &[PathBuf]) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    for path in find_descriptor_files(runtime, catalog_dir)? {
        match runtime.read_to_string(&path) {
            Ok(content) => catalog.publish(codec::decode(&content)),
            Err(e) => warn!("Failed to read descriptor {:?}: {}", path, e),
        }
    }

    for path in extra {
        let content = runtime
            .read_to_string(path)
            .with_context(|| format!("Failed to read descriptor {:?}", path))?;
        catalog.publish(codec::decode(&content));
    }

    debug!("Loaded {} catalog entries", catalog.len());
    Ok(catalog)
}
