use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not binary operators, including `(`,
/// which continues an expression as a call instead.
///
/// # Example
/// ```
/// use simian::{
///     ast::InfixOperator,
///     interpreter::{lexer::TokenKind, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::LessEqual), Some(InfixOperator::LessEqual));
/// assert_eq!(token_to_infix_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    let operator = match kind {
        TokenKind::Plus => InfixOperator::Add,
        TokenKind::Minus => InfixOperator::Sub,
        TokenKind::Asterisk => InfixOperator::Mul,
        TokenKind::Slash => InfixOperator::Div,
        TokenKind::Less => InfixOperator::Less,
        TokenKind::Greater => InfixOperator::Greater,
        TokenKind::LessEqual => InfixOperator::LessEqual,
        TokenKind::GreaterEqual => InfixOperator::GreaterEqual,
        TokenKind::EqualEqual => InfixOperator::Equal,
        TokenKind::BangEqual => InfixOperator::NotEqual,
        _ => return None,
    };
    Some(operator)
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses the right operand of a binary operator and folds it with
    /// `left`.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative: `a - b - c` is
    /// `(a - b) - c`.
    pub(super) fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = token_to_infix_operator(self.current.kind)?;
        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { operator,
                           left: Box::new(left),
                           right: Box::new(right) })
    }

    /// Parses the argument list of a call whose callee is `callee`.
    pub(super) fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expr::Call { callee: Box::new(callee),
                          arguments })
    }
}
