//! iconcheck CLI - Structural validation for app icon asset catalogs
//!
//! Run without arguments to check the `Assets.xcassets` catalog next to the
//! project the binary was built in.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use iconcheck_cli::commands;

/// iconcheck - App Icon Asset Catalog Validator
///
/// Checks Assets.xcassets two directories above the binary's directory.
/// Takes no arguments.
#[derive(Parser)]
#[command(name = "iconcheck")]
#[command(author, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Cli {} = Cli::parse();

    match commands::validate::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_without_arguments() {
        assert!(Cli::try_parse_from(["iconcheck"]).is_ok());
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["iconcheck", "Assets.xcassets"]).is_err());
    }

    #[test]
    fn test_cli_rejects_flags() {
        for flag in ["--catalog", "--json", "--version", "-v"] {
            assert!(Cli::try_parse_from(["iconcheck", flag]).is_err(), "{flag}");
        }
    }
}
