//! Scanner for the reduced FORTRAN 77 dialect.
//!
//! Handles tokenization including:
//! - Keywords (`PROGRAM`, `END`, `INTEGER`, `REAL`, `DO`), matched in any case
//! - Identifiers and unsigned numeric literals
//! - Operators (`+ - * / ** =`) and punctuation (`, ( )`)
//! - Line terminators, which are significant and become `Newline` tokens
//! - Comment lines (`C`/`c` in column 1), which collapse into a single `Newline`
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `rules` - Ordered matching rules tried at each position

mod rules;
pub mod tokens;

use std::iter::FusedIterator;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::LexicalError;
use f77_core::lang::conventions;
use rules::{Action, RULES};

/// On-demand scanner over a source string.
///
/// Call [`Scanner::next_token`] repeatedly, or use the scanner as an iterator. Positions are 1-based; columns count
/// characters, not bytes.
///
/// ## Notes
/// - After the end of input, `next_token` keeps returning `Eof`.
/// - On an unexpected character, `next_token` keeps returning the same error; the iterator yields it once and then
///   stops.
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    /// Set once the iterator has yielded `Eof` or an error.
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner positioned at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            column: 1,
            done: false,
        }
    }

    /// Produce the next significant token.
    ///
    /// ## Errors
    /// Returns [`LexicalError`] if no rule matches at the current position.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        let source = self.source;
        loop {
            let rest = &source[self.pos..];
            let Some(first) = rest.chars().next() else {
                return Ok(self.eof_token());
            };

            let Some((action, len)) = RULES
                .iter()
                .find_map(|rule| rule.matcher.match_len(rest, self.column).map(|len| (rule.action, len)))
            else {
                return Err(self.unexpected_character(first));
            };

            let text = &rest[..len];
            let (line, column) = (self.line, self.column);
            let span = Span::new(self.pos, self.pos + len);
            self.consume(text);

            let token = match action {
                Action::Skip => continue,
                Action::Comment => Token::new(TokenKind::Newline, comment_terminator(text), line, column, span),
                Action::LineEnd => Token::new(TokenKind::Newline, text, line, column, span),
                Action::Emit(kind) => Token::new(kind, text, line, column, span),
                Action::Word => match keyword_id(text) {
                    Some(id) => Token::new(
                        TokenKind::Keyword(id),
                        conventions::fold_keyword_case(text),
                        line,
                        column,
                        span,
                    ),
                    None => Token::new(TokenKind::Ident, text, line, column, span),
                },
            };
            return Ok(token);
        }
    }

    /// Move past `text`, keeping line and column in step.
    fn consume(&mut self, text: &str) {
        self.pos += text.len();
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn eof_token(&self) -> Token {
        Token::new(
            TokenKind::Eof,
            "",
            self.line,
            self.column,
            Span::new(self.source.len(), self.source.len()),
        )
    }

    fn unexpected_character(&self, character: char) -> LexicalError {
        LexicalError {
            character,
            line: self.line,
            column: self.column,
            span: Span::new(self.pos, self.pos + character.len_utf8()).into(),
        }
    }
}

/// The line terminator a comment line ends with; a comment on the last line still reads as `\n`.
fn comment_terminator(text: &str) -> &str {
    if text.ends_with("\r\n") { "\r\n" } else { "\n" }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_token();
        self.done = match &result {
            Ok(token) => token.kind == TokenKind::Eof,
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Convenience function to tokenize source code, ending with an `Eof` token.
///
/// ## Errors
/// Returns the first [`LexicalError`]; no partial token list is produced.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexicalError> {
    let tokens = Scanner::new(source).collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(token_count = tokens.len(), "scanned source");
    Ok(tokens)
}
