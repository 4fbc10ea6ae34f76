use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

/// Binding power of an operator, lowest first.
///
/// This table decides both precedence and associativity: an infix rule
/// parses its right operand with its own precedence, so operators of equal
/// precedence group to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// `f(x)`
    Call,
}

impl Precedence {
    /// Returns the precedence of `kind` in infix position.
    ///
    /// Tokens that cannot continue an expression have `Lowest`, which stops
    /// the climbing loop.
    ///
    /// # Example
    /// ```
    /// use simian::interpreter::{lexer::TokenKind, parser::expression::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert!(Precedence::of(TokenKind::Less) > Precedence::of(TokenKind::EqualEqual));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::EqualEqual | TokenKind::BangEqual => Self::Equals,
            TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A rule for a token that starts an expression. Called with that token as
/// `current`; leaves `current` on the last token of the expression.
type PrefixRule<I> = fn(&mut Parser<I>) -> Option<Expr>;

/// A rule for a token that continues an expression. Called with the operator
/// as `current` and the left-hand side parsed so far.
type InfixRule<I> = fn(&mut Parser<I>, Expr) -> Option<Expr>;

impl<I: Iterator<Item = Token>> Parser<I> {
    fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<I>> {
        match kind {
            TokenKind::Identifier => Some(Self::parse_identifier),
            TokenKind::Integer => Some(Self::parse_integer_literal),
            TokenKind::String => Some(Self::parse_string_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Null => Some(Self::parse_null),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixRule<I>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual
            | TokenKind::EqualEqual
            | TokenKind::BangEqual => Some(Self::parse_infix_expression),
            TokenKind::LParen => Some(Self::parse_call_expression),
            _ => None,
        }
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// Starts from the prefix rule of the current token, then keeps folding
    /// the left-hand side into infix rules while the next token binds tighter
    /// than `precedence`. Stops in front of a `;`.
    ///
    /// # Returns
    /// `None` if no expression could be built here; a diagnostic has been
    /// recorded in that case.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let Some(prefix) = Self::prefix_rule(self.current.kind) else {
            self.error(ParseError::no_prefix(&self.current));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = Self::infix_rule(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Precedence of the current token.
    pub(super) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }
}
