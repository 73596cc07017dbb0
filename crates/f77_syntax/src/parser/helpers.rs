/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// `Eof` is never consumed; advancing at the end returns it again.
    fn advance(&mut self) -> &Token {
        if self.is_at_end() {
            return self.peek();
        }
        self.pos += 1;
        let token = &self.tokens[self.pos - 1];
        tracing::trace!(target: "f77_syntax::parser", token = %token, "consumed");
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// If the current token matches `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        self.match_token(TokenKind::Punctuation(id))
    }

    /// Consume a token of `kind` or fail with an error naming it.
    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(Expected::Token(kind)))
        }
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<&Token, ParseError> {
        self.expect(TokenKind::Keyword(id))
    }

    fn expect_op(&mut self, id: OperatorId) -> Result<&Token, ParseError> {
        self.expect(TokenKind::Operator(id))
    }

    fn expect_punct(&mut self, id: PunctuationId) -> Result<&Token, ParseError> {
        self.expect(TokenKind::Punctuation(id))
    }

    /// Open one more expression level, failing at the current token once the cap is reached.
    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err(self.error_here(Expected::ShallowerNesting));
        }
        self.depth += 1;
        Ok(())
    }

    /// Build an error at the current token.
    fn error_here(&self, expected: Expected) -> ParseError {
        ParseError::unexpected(expected, self.peek())
    }
}
