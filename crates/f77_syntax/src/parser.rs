//! Recursive-descent parser for the reduced FORTRAN 77 dialect.
//!
//! Converts a token stream into a [`Program`] with one token of lookahead. The grammar is LL(1):
//!
//! ```text
//! Program       := PROGRAM Ident LineEnd StatementList END LineEnd? EOF
//! StatementList := ( LineEnd | Statement LineEnd? )*
//! Statement     := Declaration | CountedLoop | Assignment
//! Declaration   := (INTEGER | REAL) Ident ( "," Ident )*
//! Assignment    := Ident "=" Expression
//! CountedLoop   := DO Ident "=" Expression "," Expression
//! Expression    := Term ( ("+" | "-") Term )*
//! Term          := Factor ( ("*" | "/") Factor )*
//! Factor        := ( "(" Expression ")" | Number | Ident ) ( "**" Factor )?
//! ```
//!
//! Parsing stops at the first error.
//!
//! Expression depth is capped at [`MAX_EXPR_DEPTH`]. Every `(`, every `**`, and every `+ - * /` folded onto a
//! left operand counts one level; the token that would exceed the cap is reported as a [`ParseError`]. This keeps
//! the recursion, and every later walk over the tree, within a bounded stack.
//!
//! ## Examples
//!
//! ```rust
//! use f77_syntax::{lexer, parser};
//!
//! let source = "PROGRAM P\nX = 1 + 2\nEND\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.name, "P");
//! assert_eq!(ast.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{Expected, ParseError};
use crate::lexer::{Token, TokenKind};
use f77_core::lang::keywords::KeywordId;
use f77_core::lang::operators::OperatorId;
use f77_core::lang::punctuation::PunctuationId;

/// Deepest expression tree the parser builds.
pub const MAX_EXPR_DEPTH: usize = 512;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
