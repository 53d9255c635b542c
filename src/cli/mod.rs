//! CLI module for the enumerable class generator
//!
//! This module provides the command-line host around the generator core.
//!
//! ## Commands
//!
//! - `generate <CLASS_ID> --values <LIST>` - Generate an enumerable class file
//! - `normalize --values <LIST>` - Show the constants a value list normalizes to
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//! Input validation failures exit with [`ExitCode::USAGE`]; filesystem failures with [`ExitCode::FAILURE`].

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputError;
use crate::request::{DEFAULT_DESCRIPTION, DEFAULT_NAMESPACE, ValidationError};
use crate::version::ENUMGEN_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        // Debug formatting of a miette report is the graphical, span-labelled rendering.
        Self::usage(format!("{:?}", miette::Report::new(err)))
    }
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        Self::failure(format!("Error: {}", err))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generator for enumerable PHP classes
#[derive(Parser, Debug)]
#[command(name = "enumgen")]
#[command(version = ENUMGEN_VERSION)]
#[command(about = "Generate enumerable classes with constant label tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an enumerable class file
    Generate(GenerateArgs),

    /// Show the constants a value list normalizes to
    Normalize {
        /// Constant values, separated by commas
        #[arg(long, value_name = "LIST")]
        values: String,
        /// Sort values before numbering them
        #[arg(long)]
        sort: bool,
        /// First constant value
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Enumerable class id in lower case, e.g. `order-item` generates `OrderItem.php`
    #[arg(value_name = "CLASS_ID")]
    pub class_id: String,

    /// Constant values, separated by commas, e.g. `free, paid`
    #[arg(long, value_name = "LIST")]
    pub values: String,

    /// Namespace of the generated class
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Author in the generated docblock
    #[arg(long, default_value = "")]
    pub author: String,

    /// Description in the generated docblock
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// First constant value
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// Sort values before numbering them
    #[arg(long)]
    pub sort: bool,

    /// Directory the namespace is resolved under
    #[arg(long, value_name = "DIR", default_value = ".", conflicts_with = "aliases")]
    pub out_dir: PathBuf,

    /// Resolve the first namespace segment through an alias, e.g. `app=./src`
    #[arg(long = "alias", value_name = "NAME=DIR", value_parser = parse_alias)]
    pub aliases: Vec<(String, PathBuf)>,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Print the class to stdout instead of writing it
    #[arg(long)]
    pub stdout: bool,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Show a diff against the existing file
    #[arg(long)]
    pub diff: bool,

    /// Replace an existing file with different content
    #[arg(long)]
    pub overwrite: bool,
}

fn parse_alias(raw: &str) -> Result<(String, PathBuf), String> {
    match raw.split_once('=') {
        Some((name, dir)) if !name.trim().is_empty() && !dir.trim().is_empty() => {
            Ok((name.trim().to_string(), PathBuf::from(dir.trim())))
        }
        _ => Err(format!("expected NAME=DIR, got `{raw}`")),
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Generate(args)) => commands::generate_class(&args),
        Some(Command::Normalize {
            values,
            sort,
            start,
            json,
        }) => commands::normalize_values(&values, sort, start, json),
        None => Err(CliError::usage("No command given. Run `enumgen --help` for usage.")),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["enumgen", "generate", "order-item", "--values", "free, paid"]).unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(args.class_id, "order-item");
        assert_eq!(args.values, "free, paid");
        assert_eq!(args.namespace, DEFAULT_NAMESPACE);
        assert_eq!(args.description, DEFAULT_DESCRIPTION);
        assert_eq!(args.start, 0);
        assert_eq!(args.indent, 4);
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(!args.sort && !args.stdout && !args.dry_run && !args.overwrite);
    }

    #[test]
    fn test_cli_parse_generate_negative_start() {
        let cli = Cli::try_parse_from(["enumgen", "generate", "plan", "--values", "a", "--start", "-5"]).unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(args.start, -5);
    }

    #[test]
    fn test_cli_parse_aliases() {
        let cli = Cli::try_parse_from([
            "enumgen", "generate", "plan", "--values", "a", "--alias", "app=./src", "--alias", "common=/srv/common",
        ])
        .unwrap();
        let Some(Command::Generate(args)) = cli.command else {
            panic!("Expected Generate command");
        };
        assert_eq!(
            args.aliases,
            vec![
                ("app".to_string(), PathBuf::from("./src")),
                ("common".to_string(), PathBuf::from("/srv/common")),
            ]
        );
    }

    #[test]
    fn test_cli_rejects_alias_and_out_dir_together() {
        let result = Cli::try_parse_from([
            "enumgen", "generate", "plan", "--values", "a", "--alias", "app=src", "--out-dir", "out",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_values() {
        assert!(Cli::try_parse_from(["enumgen", "generate", "plan"]).is_err());
    }

    #[test]
    fn test_cli_parse_normalize() {
        let cli = Cli::try_parse_from(["enumgen", "normalize", "--values", "b, a", "--sort", "--json"]).unwrap();
        if let Some(Command::Normalize { values, sort, json, start }) = cli.command {
            assert_eq!(values, "b, a");
            assert!(sort);
            assert!(json);
            assert_eq!(start, 0);
        } else {
            panic!("Expected Normalize command");
        }
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(parse_alias("app=src").unwrap(), ("app".to_string(), PathBuf::from("src")));
        assert!(parse_alias("app").is_err());
        assert!(parse_alias("=src").is_err());
        assert!(parse_alias("app=").is_err());
    }

    #[test]
    fn test_no_command_is_usage_error() {
        let err = execute(Cli { command: None }).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
    }

    #[test]
    fn test_validation_errors_map_to_usage_exit_code() {
        let err: CliError = ValidationError::MissingField { field: "Start" }.into();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert!(err.message.contains("Start cannot be blank."));
    }

    #[test]
    fn test_output_errors_map_to_failure_exit_code() {
        let err: CliError = OutputError::EmptyNamespace.into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }
}
