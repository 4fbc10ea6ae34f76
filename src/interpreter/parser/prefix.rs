use crate::{
    ast::{Expr, Identifier, Literal, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::Parser, expression::Precedence},
    },
};

// Every prefix rule has the signature of `PrefixRule`.
#[allow(clippy::unnecessary_wraps, clippy::unused_self)]
impl<I: Iterator<Item = Token>> Parser<I> {
    pub(super) fn parse_identifier(&mut self) -> Option<Expr> {
        Some(Expr::Identifier(Identifier::from(self.current.literal.clone())))
    }

    /// Parses a decimal integer literal.
    ///
    /// Literals outside the `i64` range are recorded as
    /// [`ParseError::InvalidInteger`] and produce no node.
    pub(super) fn parse_integer_literal(&mut self) -> Option<Expr> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expr::Literal(Literal::Integer(value))),
            Err(_) => {
                self.error(ParseError::InvalidInteger { literal: self.current.literal.clone(),
                                                        line:    self.current.line,
                                                        column:  self.current.column, });
                None
            },
        }
    }

    pub(super) fn parse_string_literal(&mut self) -> Option<Expr> {
        Some(Expr::Literal(Literal::String(self.current.literal.clone())))
    }

    pub(super) fn parse_boolean(&mut self) -> Option<Expr> {
        Some(Expr::Literal(Literal::Boolean(self.current_is(TokenKind::True))))
    }

    pub(super) fn parse_null(&mut self) -> Option<Expr> {
        Some(Expr::Literal(Literal::Null))
    }

    /// Parses `!<operand>` or `-<operand>`. The operand binds at prefix
    /// precedence, so `-a * b` is `(-a) * b`.
    pub(super) fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Not,
            TokenKind::Minus => PrefixOperator::Negate,
            _ => return None,
        };
        self.next_token();
        let operand = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { operator,
                            operand: Box::new(operand) })
    }

    /// Parses `( <expr> )`. Grouping leaves no node of its own.
    pub(super) fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expr)
    }

    /// Parses an `if` expression with an optional `else` block.
    ///
    /// Syntax:
    /// ```text
    ///     if (<condition>) { <statements> } else { <statements> }
    /// ```
    pub(super) fn parse_if_expression(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses `fn(<parameters>) { <statements> }`.
    pub(super) fn parse_function_literal(&mut self) -> Option<Expr> {
        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_parameters()?;
        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block();

        Some(Expr::FunctionLiteral { parameters, body })
    }
}
