//! Catalog walker: finds icon sets under a catalog root and validates each.

use crate::icon_set::IconSet;
use crate::report::{CatalogReport, Finding};
use crate::ICON_SET_SUFFIX;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Finds every `*.appiconset` directory below `root`, at any depth.
///
/// The root itself is never treated as an icon set. Results are ordered by
/// path; unreadable entries are logged and skipped.
pub fn discover_icon_sets(root: &Path) -> Vec<IconSet> {
    let mut sets = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable catalog entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry
            .file_name()
            .to_string_lossy()
            .ends_with(ICON_SET_SUFFIX)
        {
            debug!(path = %entry.path().display(), "found icon set");
            sets.push(IconSet::from_path(entry.path()));
        }
    }

    sets
}

/// Validates every icon set in the catalog at `root` and merges the findings.
///
/// A missing root yields one error and nothing else. A root without icon sets
/// yields one warning.
pub fn validate_catalog(root: &Path) -> CatalogReport {
    let mut report = CatalogReport::new();

    if !root.exists() {
        report.add_finding(Finding::error(
            "catalog/not-found",
            format!("Catalog directory not found at {}", root.display()),
        ));
        return report;
    }

    let sets = discover_icon_sets(root);
    if sets.is_empty() {
        let catalog_name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        report.add_finding(Finding::warning(
            "catalog/no-icon-sets",
            format!("No {} directories found in {}", ICON_SET_SUFFIX, catalog_name),
        ));
        return report;
    }

    for set in &sets {
        report.merge(set.validate());
    }

    debug!(
        icon_sets = report.summary.icon_set_count,
        errors = report.summary.error_count,
        warnings = report.summary.warning_count,
        "validated catalog"
    );

    report
}

/// Validates the catalog at `root` and returns `(errors, warnings)` messages.
pub fn validate_catalog_messages(root: &Path) -> (Vec<String>, Vec<String>) {
    validate_catalog(root).into_messages()
}
