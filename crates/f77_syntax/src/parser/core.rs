// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint. It is
// `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Parser state.
///
/// ## Notes
/// - The parser consumes a borrowed token slice and never backtracks.
/// - If the slice is empty or does not end with `Eof`, reading past the end yields an `Eof` placed just after the
///   last token, so truncated input reports "found end of input" instead of panicking.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    /// Expression levels currently open; bounded by [`MAX_EXPR_DEPTH`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `f77_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::Eof => last.clone(),
            Some(last) => Token::new(
                TokenKind::Eof,
                "",
                last.line,
                last.column + last.text.chars().count(),
                Span::new(last.span.end, last.span.end),
            ),
            None => Token::new(TokenKind::Eof, "", 1, 1, Span::default()),
        };
        Self {
            tokens,
            pos: 0,
            eof,
            depth: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`]: the token that did not fit, and what was expected instead.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        self.program()
    }
}
