use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::Parser, expression::Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a parenthesized, comma-separated list of parameter names.
    ///
    /// Called with `(` as the current token; leaves `)` as the current token.
    /// An immediately encountered `)` produces an empty list.
    ///
    /// Grammar: `parameters := "(" (identifier ("," identifier)*)? ")"`
    pub(super) fn parse_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::from(self.current.literal.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier::from(self.current.literal.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    /// Parses comma-separated expressions up to the `closing` token.
    ///
    /// Called with the opening token as current; leaves `closing` as the
    /// current token.
    ///
    /// Grammar (simplified): `list := (expression ("," expression)*)? closing`
    pub(super) fn parse_expression_list(&mut self, closing: TokenKind) -> Option<Vec<Expr>> {
        let mut items = Vec::new();
        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(closing)?;
        Some(items)
    }
}
