//! Token types for the scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including `=`)
//! - `Punctuation(PunctuationId)` for `,`, `(` and `)`
//!
//! ## Notes
//! - `TokenKind` carries no payload; the matched spelling lives in [`Token::text`]. This keeps kind comparison a
//!   plain `==`, which is all the parser's `expect` needs.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use f77_core::lang::keywords::{self, KeywordId};
use f77_core::lang::operators::{self, OperatorId};
use f77_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,

    // ========== Layout ==========
    Newline,

    // ========== Special ==========
    Eof,
}

impl TokenKind {
    /// Human-readable description used in diagnostics (`identifier`, `'='`, `end of line`, ...).
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("'{}'", keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", operators::as_str(*id)),
            TokenKind::Punctuation(id) => format!("'{}'", punctuation::as_str(*id)),
            TokenKind::Ident => "identifier".to_string(),
            TokenKind::Number => "numeric literal".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Upper-case tag used by token dumps (`PROGRAM`, `IDENT`, `POWER`, `NEWLINE`, ...).
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TokenKind::Keyword(id) => keywords::as_str(*id),
            TokenKind::Operator(OperatorId::Plus) => "PLUS",
            TokenKind::Operator(OperatorId::Minus) => "MINUS",
            TokenKind::Operator(OperatorId::Star) => "STAR",
            TokenKind::Operator(OperatorId::Slash) => "SLASH",
            TokenKind::Operator(OperatorId::StarStar) => "POWER",
            TokenKind::Operator(OperatorId::Assign) => "EQ",
            TokenKind::Punctuation(PunctuationId::Comma) => "COMMA",
            TokenKind::Punctuation(PunctuationId::LParen) => "LPAREN",
            TokenKind::Punctuation(PunctuationId::RParen) => "RPAREN",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "EOF",
        };
        f.write_str(tag)
    }
}

/// A token with its kind, spelling, and source position.
///
/// ## Notes
/// - `line` and `column` are 1-based and point at the first character.
/// - `span` holds byte offsets into the scanned source, for diagnostics that underline text.
/// - Keyword tokens carry the upper-cased spelling; identifiers keep the original one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            span,
        }
    }
}

/// Compact dump form: `Token(IDENT,'x'@2:1)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({},'{}'@{}:{})",
            self.kind,
            self.text.escape_debug(),
            self.line,
            self.column
        )
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved (any case).
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
