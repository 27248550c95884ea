//! Finding and report types for structured output.

use serde::{Deserialize, Serialize};

/// Severity level for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory, never affects the exit status.
    Warning,
    /// Structurally broken, fails the run.
    Error,
}

/// A single problem detected in the catalog or one of its icon sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the check that produced this finding
    /// (e.g. "iconset/missing-file", "catalog/not-found").
    pub rule_id: String,

    /// Severity level.
    pub severity: Severity,

    /// Human-readable description of the problem.
    pub message: String,

    /// Directory name of the icon set the finding belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_set: Option<String>,

    /// File inside the icon set the finding is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl Finding {
    /// Creates a new finding with required fields.
    pub fn new(rule_id: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            icon_set: None,
            filename: None,
        }
    }

    /// Shorthand for an error-level finding.
    pub fn error(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Error, message)
    }

    /// Shorthand for a warning-level finding.
    pub fn warning(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, Severity::Warning, message)
    }

    /// Builder method to set the icon set name.
    pub fn with_icon_set(mut self, icon_set: impl Into<String>) -> Self {
        self.icon_set = Some(icon_set.into());
        self
    }

    /// Builder method to set the file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Summary statistics for a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of error-level findings.
    pub error_count: usize,
    /// Number of warning-level findings.
    pub warning_count: usize,
    /// Number of icon sets that were validated.
    pub icon_set_count: usize,
}

/// Complete report for one catalog or one icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    /// True if no errors were found.
    pub ok: bool,
    /// Error-level findings.
    pub errors: Vec<Finding>,
    /// Warning-level findings.
    pub warnings: Vec<Finding>,
    /// Summary statistics.
    pub summary: ReportSummary,
}

impl CatalogReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            summary: ReportSummary::default(),
        }
    }

    /// Adds a finding to the report and updates the summary.
    pub fn add_finding(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Warning => {
                self.summary.warning_count += 1;
                self.warnings.push(finding);
            }
            Severity::Error => {
                self.summary.error_count += 1;
                self.ok = false;
                self.errors.push(finding);
            }
        }
    }

    /// Merges another report into this one.
    pub fn merge(&mut self, other: CatalogReport) {
        for finding in other.errors {
            self.add_finding(finding);
        }
        for finding in other.warnings {
            self.add_finding(finding);
        }
        self.summary.icon_set_count += other.summary.icon_set_count;
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        !self.ok
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }

    /// Returns the total finding count.
    pub fn total_findings(&self) -> usize {
        self.summary.error_count + self.summary.warning_count
    }

    /// Flattens the report into `(errors, warnings)` message lists.
    pub fn into_messages(self) -> (Vec<String>, Vec<String>) {
        (
            self.errors.into_iter().map(|f| f.message).collect(),
            self.warnings.into_iter().map(|f| f.message).collect(),
        )
    }
}

impl Default for CatalogReport {
    fn default() -> Self {
        Self::new()
    }
}
