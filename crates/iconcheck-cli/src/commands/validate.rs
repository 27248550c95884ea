//! Validate command implementation
//!
//! Validates the asset catalog and prints the transcript.

use anyhow::{Context, Result};
use colored::Colorize;
use iconcheck_lint::{validate_catalog, CatalogReport, Finding};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use crate::location::resolve_catalog;

const SEPARATOR_WIDTH: usize = 60;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if there are no errors (warnings allowed), 1 otherwise
pub fn run() -> Result<ExitCode> {
    let catalog_path = resolve_catalog()?;
    info!(path = %catalog_path.display(), "resolved catalog");

    let report = validate_catalog(&catalog_path);
    info!(
        icon_sets = report.summary.icon_set_count,
        errors = report.summary.error_count,
        warnings = report.summary.warning_count,
        "validation finished"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_text(&mut out, &catalog_path, &report).context("Failed to write transcript")?;
    Ok(exit_code(report.ok))
}

/// Maps the outcome to the process exit code.
pub fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Writes the human-readable transcript for `report`.
pub fn render_text<W: Write>(
    out: &mut W,
    catalog_path: &Path,
    report: &CatalogReport,
) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        "Validating assets at:".cyan().bold(),
        catalog_path.display()
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;

    if report.has_warnings() {
        writeln!(out, "\n{}", "WARNINGS:".yellow().bold())?;
        write_findings(out, &report.warnings)?;
    }

    if report.has_errors() {
        writeln!(out, "\n{}", "ERRORS:".red().bold())?;
        write_findings(out, &report.errors)?;
        writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "{}", "Asset validation FAILED".red().bold())?;
        return Ok(());
    }

    if report.has_warnings() {
        writeln!(out, "\n{}", "=".repeat(SEPARATOR_WIDTH))?;
        writeln!(out, "{}", "Asset validation passed (with warnings)".green().bold())?;
    } else {
        writeln!(out, "{}", "All asset validations passed!".green().bold())?;
    }
    Ok(())
}

fn write_findings<W: Write>(out: &mut W, findings: &[Finding]) -> io::Result<()> {
    for finding in findings {
        writeln!(out, "  - {}", finding.message)?;
    }
    Ok(())
}
