//! Test harness utilities for running the iconcheck binary.
//!
//! The binary takes no arguments and always checks the catalog two levels
//! above its own directory, so tests copy it into a fixture project's
//! `target/release/` before running it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of running the iconcheck CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed with exit code 1.
    pub fn assert_failure(&self) {
        assert_eq!(
            self.exit_code, 1,
            "Expected exit code 1, got {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }
}

/// Copies `binary` to `<project_dir>/target/release/`, where a zero-argument
/// run resolves `<project_dir>/Assets.xcassets`. Returns the copied path.
pub fn install_binary(binary: &Path, project_dir: &Path) -> PathBuf {
    let release_dir = project_dir.join("target").join("release");
    fs::create_dir_all(&release_dir).expect("Failed to create release dir");
    let file_name = binary.file_name().expect("binary path has a file name");
    let installed = release_dir.join(file_name);
    fs::copy(binary, &installed).expect("Failed to copy binary");
    installed
}

/// Runs `binary` with `args`.
///
/// Color and logging are switched off so stdout is the plain transcript.
pub fn run_iconcheck(binary: &Path, args: &[&str]) -> CliResult {
    let mut cmd = Command::new(binary);
    cmd.args(args)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");

    match cmd.output() {
        Ok(out) => CliResult::from_output(out),
        Err(e) => CliResult {
            success: false,
            exit_code: -1,
            stdout: String::new(),
            stderr: format!("Failed to run CLI: {}", e),
        },
    }
}
