#![forbid(unsafe_code)]
//! f77parse: scanner and LL(1) parser for a reduced FORTRAN 77 dialect
//!
//! The syntax frontend lives in the `f77_syntax` crate (tokens, scanner, AST, parser, diagnostics) and the shared
//! vocabulary in `f77_core`. This crate adds the tree printer and the command-line interface.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let program = f77parse::parse("PROGRAM P\nX = 1 + 2\nEND\n").unwrap();
//! assert_eq!(f77parse::tree::render(&program), "Program P\n  Assign X =\n    BinOp +\n      Number 1\n      Number 2\n");
//! ```

pub mod cli;
pub mod tree;
pub mod version;

pub use f77_syntax::ast;
pub use f77_syntax::diagnostics;
pub use f77_syntax::lexer;
pub use f77_syntax::parse;
pub use f77_syntax::parser;

pub use tree::{TreeConfig, render, render_with_config};
