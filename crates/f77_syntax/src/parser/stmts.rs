/// Program and statement parsing.
///
/// Statements are dispatched on their first token: `INTEGER`/`REAL` start a declaration, `DO` starts a loop header,
/// anything else must be an assignment.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self) -> Result<Program, ParseError> {
        self.expect_keyword(KeywordId::Program)?;
        let name = self.identifier()?;
        self.expect(TokenKind::Newline)?;

        let statements = self.statement_list()?;

        self.expect_keyword(KeywordId::End)?;
        self.match_token(TokenKind::Newline);
        self.expect(TokenKind::Eof)?;

        tracing::debug!(program = %name, statement_count = statements.len(), "parsed program");
        Ok(Program { name, statements })
    }

    /// Parse statements up to (not including) `END`.
    ///
    /// Blank lines are skipped. A statement may be followed by a line end but does not need one, so two statements
    /// can share a line.
    fn statement_list(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();
        while !self.check_keyword(KeywordId::End) && !self.is_at_end() {
            if self.match_token(TokenKind::Newline) {
                continue;
            }
            statements.push(self.statement()?);
            self.match_token(TokenKind::Newline);
        }
        Ok(statements)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Statement, ParseError> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Keyword(KeywordId::Integer | KeywordId::Real) => self.declaration().map(Statement::Declaration),
            TokenKind::Keyword(KeywordId::Do) => self.counted_loop().map(Statement::CountedLoop),
            _ => self.assignment().map(Statement::Assignment),
        }
    }

    /// `INTEGER A, B` / `REAL X`
    fn declaration(&mut self) -> Result<Declaration, ParseError> {
        let kind = match self.peek().keyword_id().and_then(DeclKind::from_keyword) {
            Some(kind) => kind,
            None => return Err(self.error_here(Expected::Token(TokenKind::Keyword(KeywordId::Integer)))),
        };
        self.advance();
        let names = self.identifier_list()?;
        Ok(Declaration { kind, names })
    }

    /// `X = expr`
    fn assignment(&mut self) -> Result<Assignment, ParseError> {
        let target = self.identifier()?;
        self.expect_op(OperatorId::Assign)?;
        let value = self.expression()?;
        Ok(Assignment { target, value })
    }

    /// `DO J = start, end`
    fn counted_loop(&mut self) -> Result<CountedLoop, ParseError> {
        self.expect_keyword(KeywordId::Do)?;
        let variable = self.identifier()?;
        self.expect_op(OperatorId::Assign)?;
        let start = self.expression()?;
        self.expect_punct(PunctuationId::Comma)?;
        let end = self.expression()?;
        Ok(CountedLoop { variable, start, end })
    }
}
