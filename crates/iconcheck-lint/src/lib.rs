//! Structural lint system for icon asset catalogs.
//!
//! Checks that every `*.appiconset` directory in an asset catalog carries a
//! readable `Contents.json` manifest, that the files it references exist,
//! that every file present is accounted for, and that icons are PNGs.
//!
//! # Example
//!
//! ```no_run
//! use iconcheck_lint::validate_catalog;
//! use std::path::Path;
//!
//! let report = validate_catalog(Path::new("Assets.xcassets"));
//!
//! if !report.ok {
//!     for finding in &report.errors {
//!         eprintln!("ERROR: {} - {}", finding.rule_id, finding.message);
//!     }
//! }
//! ```

pub mod catalog;
pub mod icon_set;
pub mod manifest;
pub mod report;
pub mod rules;

pub use catalog::{discover_icon_sets, validate_catalog, validate_catalog_messages};
pub use icon_set::{validate, validate_icon_set, IconSet};
pub use manifest::{ImageEntry, Manifest, ManifestError};
pub use report::{CatalogReport, Finding, ReportSummary, Severity};
pub use rules::{IconSetContext, IconSetRule};

/// File name of the manifest inside every icon set.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

/// Directory suffix that marks an app icon set.
pub const ICON_SET_SUFFIX: &str = ".appiconset";

/// Conventional directory name of the asset catalog root.
pub const CATALOG_DIR_NAME: &str = "Assets.xcassets";
