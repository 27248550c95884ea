//! Validation of a single icon set directory.
//!
//! The manifest gates everything else: if it is missing or cannot be parsed,
//! that single error is the whole result for the set. Otherwise the referenced
//! and actual file sets are built and every rule from [`rules::all_rules`]
//! runs over them.

use crate::manifest::Manifest;
use crate::report::{CatalogReport, Finding};
use crate::rules::{self, IconSetContext};
use crate::MANIFEST_FILE_NAME;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An icon set directory discovered in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IconSet {
    /// Path to the directory.
    pub path: PathBuf,
    /// Directory name, e.g. "AppIcon.appiconset".
    pub name: String,
}

impl IconSet {
    /// Wraps a directory path, taking the name from its last component.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Location of this set's manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join(MANIFEST_FILE_NAME)
    }

    /// Runs the manifest gates and all icon set rules.
    pub fn validate(&self) -> CatalogReport {
        let mut report = CatalogReport::new();
        report.summary.icon_set_count = 1;

        let manifest_path = self.manifest_path();
        if !manifest_path.exists() {
            report.add_finding(
                Finding::error(
                    "iconset/missing-manifest",
                    format!("Missing {} in {}", MANIFEST_FILE_NAME, self.path.display()),
                )
                .with_icon_set(&self.name),
            );
            return report;
        }

        let manifest = match Manifest::load(&manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                report.add_finding(
                    Finding::error("iconset/invalid-manifest", e.to_string())
                        .with_icon_set(&self.name),
                );
                return report;
            }
        };

        let actual = match self.actual_files() {
            Ok(files) => files,
            Err(e) => {
                report.add_finding(
                    Finding::error(
                        "iconset/unreadable",
                        format!("Unable to list files in {}: {}", self.path.display(), e),
                    )
                    .with_icon_set(&self.name),
                );
                return report;
            }
        };
        let referenced = manifest.referenced_files();

        let ctx = IconSetContext {
            name: &self.name,
            referenced: &referenced,
            actual: &actual,
        };

        for rule in rules::all_rules() {
            for finding in rule.check(&ctx) {
                report.add_finding(finding);
            }
        }

        debug!(
            icon_set = %self.name,
            referenced = referenced.len(),
            actual = actual.len(),
            errors = report.summary.error_count,
            warnings = report.summary.warning_count,
            "validated icon set"
        );

        report
    }

    /// Names of the regular files directly inside the set, minus the manifest.
    fn actual_files(&self) -> io::Result<BTreeSet<String>> {
        let mut files = BTreeSet::new();
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name != MANIFEST_FILE_NAME {
                files.insert(name);
            }
        }
        Ok(files)
    }
}

/// Validates one icon set directory and returns its findings.
pub fn validate_icon_set(path: &Path) -> CatalogReport {
    IconSet::from_path(path).validate()
}

/// Validates one icon set directory and returns `(errors, warnings)` messages.
pub fn validate(path: &Path) -> (Vec<String>, Vec<String>) {
    validate_icon_set(path).into_messages()
}
