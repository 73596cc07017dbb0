//! Scanner and parser errors.
//!
//! Both stages stop at the first problem, so each error type describes exactly one failure. They implement
//! [`miette::Diagnostic`] so the CLI can render them against the source with a labelled span.

use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use crate::parser::MAX_EXPR_DEPTH;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.end - span.start)
    }
}

/// A character that starts no token.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("unexpected character '{character}' at line {line}, column {column}")]
#[diagnostic(
    code(f77::lex::unexpected_character),
    help("only letters, digits, `+ - * / ** = , ( )`, spaces and tabs may appear outside comment lines")
)]
pub struct LexicalError {
    pub character: char,
    pub line: usize,
    pub column: usize,
    #[label("not a valid token")]
    pub span: SourceSpan,
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific token kind (`expect`).
    Token(TokenKind),
    /// `(`, a number or an identifier.
    FactorStart,
    /// The expression already reached [`MAX_EXPR_DEPTH`]; the token would nest it further.
    ShallowerNesting,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => f.write_str(&kind.describe()),
            Expected::FactorStart => f.write_str("a valid factor start"),
            Expected::ShallowerNesting => write!(f, "an expression nested at most {MAX_EXPR_DEPTH} levels deep"),
        }
    }
}

/// The current token did not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "expected {expected}, found {} at line {line}, column {column}",
    describe_found(.found, .text)
)]
#[diagnostic(code(f77::parse::unexpected_token))]
pub struct ParseError {
    pub expected: Expected,
    pub found: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    #[label("expected {expected} here")]
    pub span: SourceSpan,
}

impl ParseError {
    /// Build an error reporting `found` where `expected` was required.
    pub fn unexpected(expected: Expected, found: &Token) -> Self {
        Self {
            expected,
            found: found.kind,
            text: found.text.clone(),
            line: found.line,
            column: found.column,
            span: found.span.into(),
        }
    }
}

fn describe_found(kind: &TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Ident | TokenKind::Number => format!("{} '{}'", kind.describe(), text),
        _ => kind.describe(),
    }
}

/// Either stage's failure, as returned by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// 1-based `(line, column)` of the offending character or token.
    pub fn position(&self) -> (usize, usize) {
        match self {
            SyntaxError::Lexical(e) => (e.line, e.column),
            SyntaxError::Parse(e) => (e.line, e.column),
        }
    }
}
