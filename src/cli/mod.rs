//! CLI module for f77parse
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `[FILE]` - Parse and print the AST as an indented tree (default action)
//! - `tree [FILE] [--indent N]` - Same, with a configurable indent width
//! - `lex [FILE]` - Print one token per line
//! - `ast [FILE]` - Print the AST's debug representation
//! - `check [FILE]` - Parse only and print a one-line summary
//!
//! `FILE` may be omitted or given as `-` to read standard input.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::tree::TreeConfig;
use crate::version::F77PARSE_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Scanner and parser for a reduced FORTRAN 77 dialect
#[derive(Parser, Debug)]
#[command(name = "f77parse")]
#[command(version = F77PARSE_VERSION)]
#[command(about = "Scan and parse reduced FORTRAN 77 programs", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse and print as a tree (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Log every token the parser consumes (to stderr)
    #[arg(long, global = true)]
    pub trace: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse and print the AST as an indented tree
    Tree {
        /// Source file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Spaces per tree level
        #[arg(long, value_name = "N", default_value_t = TreeConfig::default().indent_width)]
        indent: usize,
    },

    /// Print the token stream, one token per line
    Lex {
        /// Source file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the AST's debug representation
    Ast {
        /// Source file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Parse only and report success
    Check {
        /// Source file (`-` or omitted: standard input)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
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
        Some(Command::Tree { file, indent }) => {
            commands::tree_file(file.as_deref(), TreeConfig::new().with_indent_width(indent))
        }
        Some(Command::Lex { file }) => commands::lex_file(file.as_deref()),
        Some(Command::Ast { file }) => commands::ast_file(file.as_deref()),
        Some(Command::Check { file }) => commands::check_file(file.as_deref()),
        // Default: print the tree of the file (or stdin)
        None => commands::tree_file(cli.file.as_deref(), TreeConfig::default()),
    }
}

// ============================================================================
// Tests
// ============================================================================
