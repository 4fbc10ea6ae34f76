use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a block delimited by braces.
    ///
    /// Called with the opening `{` as the current token. Statements are
    /// parsed until the closing `}`, which is left as the current token.
    /// Reaching end of input first records a diagnostic and returns the
    /// statements parsed so far.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(super) fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.next_token();

        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.error(ParseError::unexpected(TokenKind::RBrace, &self.current));
                break;
            }
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }

        block
    }
}
