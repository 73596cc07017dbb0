/// Expression parsing.
///
/// Precedence climbs from `+ -` (loosest) through `* /` to `**` (tightest). The first two levels fold
/// left-associatively in a loop; `**` recurses into `factor`, which makes it right-associative. Each function
/// restores `depth` on success, so sibling subexpressions start from the same level.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut left = self.term()?;
        while let Some(op) = self.binary_op(&[BinaryOp::Add, BinaryOp::Sub])? {
            let right = self.term()?;
            left = Expr::binary(left, op, right);
        }
        self.depth = outer;
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let mut left = self.factor()?;
        while let Some(op) = self.binary_op(&[BinaryOp::Mul, BinaryOp::Div])? {
            let right = self.factor()?;
            left = Expr::binary(left, op, right);
        }
        self.depth = outer;
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let outer = self.depth;
        let kind = self.peek().kind;
        if !kind.starts_factor() {
            return Err(self.error_here(Expected::FactorStart));
        }

        let base = if kind.is_punctuation(PunctuationId::LParen) {
            self.descend()?;
            self.advance();
            let inner = self.expression()?;
            self.expect_punct(PunctuationId::RParen)?;
            inner
        } else if kind == TokenKind::Number {
            Expr::Number(self.advance().text.clone())
        } else {
            Expr::Variable(self.advance().text.clone())
        };

        let expr = if self.check_op(OperatorId::StarStar) {
            self.descend()?;
            self.advance();
            Expr::power(base, self.factor()?)
        } else {
            base
        };
        self.depth = outer;
        Ok(expr)
    }

    /// Consume the current token if it is one of `ops`, opening one expression level for the fold.
    fn binary_op(&mut self, ops: &[BinaryOp]) -> Result<Option<BinaryOp>, ParseError> {
        let Some(op) = self.peek().operator_id().and_then(BinaryOp::from_operator) else {
            return Ok(None);
        };
        if !ops.contains(&op) {
            return Ok(None);
        }
        self.descend()?;
        self.advance();
        Ok(Some(op))
    }
}
