//! Syntax frontend for the reduced FORTRAN 77 dialect: scanner, parser, AST, diagnostics.
//!
//! The crate is dependency-light and shared by the `f77parse` CLI, the fuzz targets, and any future semantic passes.
//!
//! ## Notes
//! - This crate is syntax-only: no symbol table, no type checking, no evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `f77_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use f77_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("PROGRAM P\nINTEGER A\nEND\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `f77_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

use ast::Program;
use diagnostics::SyntaxError;

/// Scan and parse `source` in one step.
///
/// ## Errors
/// Returns [`SyntaxError::Lexical`] if scanning fails and [`SyntaxError::Parse`] if the tokens do not form a
/// program. Parsing is not attempted after a lexical error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let tokens = lexer::lex(source)?;
    Ok(parser::parse(&tokens)?)
}
