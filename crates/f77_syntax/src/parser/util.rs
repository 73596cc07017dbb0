/// Miscellaneous parser utilities.
///
/// Identifier parsing shared by the statement rules.
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, ParseError> {
        Ok(self.expect(TokenKind::Ident)?.text.clone())
    }

    /// `A` or `A, B, C`
    fn identifier_list(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut idents = vec![self.identifier()?];
        while self.match_punct(PunctuationId::Comma) {
            idents.push(self.identifier()?);
        }
        Ok(idents)
    }
}
