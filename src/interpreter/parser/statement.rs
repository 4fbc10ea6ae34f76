use crate::{
    ast::{Identifier, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::Parser, expression::Precedence},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a single statement starting at the current token.
    ///
    /// The leading token selects the form:
    /// - `let` starts a binding declaration,
    /// - `return` starts a return statement,
    /// - `{` starts a block statement,
    /// - anything else is parsed as an expression statement.
    ///
    /// On return `current` is the last token of the statement, including a
    /// trailing `;` if there was one.
    ///
    /// # Returns
    /// `None` when the statement was malformed; the diagnostic has already
    /// been recorded.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::LBrace => {
                let block = self.parse_block();
                self.skip_optional_semicolon();
                Some(Statement::Block(block))
            },
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    ///
    /// A malformed declaration is skipped up to the next `;` so that parsing
    /// can resume with the following statement.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let Some(name) = self.parse_let_target() else {
            self.skip_to_terminator();
            return None;
        };

        self.next_token();
        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.skip_to_terminator();
            return None;
        };
        self.skip_optional_semicolon();

        Some(Statement::Let { name, value })
    }

    /// Parses the `<identifier> =` part of a `let`, leaving `current` on `=`.
    fn parse_let_target(&mut self) -> Option<Identifier> {
        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::from(self.current.literal.clone());
        self.expect_peek(TokenKind::Assign)?;
        Some(name)
    }

    /// Parses `return <expression>;`, recovering like `let` on failure.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();
        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            self.skip_to_terminator();
            return None;
        };
        self.skip_optional_semicolon();

        Some(Statement::Return { value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest);
        self.skip_optional_semicolon();

        expr.map(|expr| Statement::Expression { expr })
    }
}
