//! Catalog root resolution.
//!
//! The catalog is always `Assets.xcassets` two directories above the
//! directory that holds the running binary, so
//! `<project>/target/release/iconcheck` checks `<project>/Assets.xcassets`.

use anyhow::{bail, Context, Result};
use iconcheck_lint::CATALOG_DIR_NAME;
use std::env;
use std::path::{Path, PathBuf};

/// Resolves the catalog root for this process.
pub fn resolve_catalog() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to determine the executable location")?;
    catalog_path_for_executable(&exe)
}

/// Default catalog path for a binary at `exe`.
pub fn catalog_path_for_executable(exe: &Path) -> Result<PathBuf> {
    let project_root = exe
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent);
    match project_root {
        Some(root) => Ok(root.join(CATALOG_DIR_NAME)),
        None => bail!(
            "Executable {} is too close to the filesystem root to locate {}",
            exe.display(),
            CATALOG_DIR_NAME
        ),
    }
}
