use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// A Pratt parser over a token stream.
///
/// The parser looks at two tokens at a time: `current`, the token being
/// parsed, and `peek`, the one after it. Syntax errors are recorded and
/// parsing continues, so [`Parser::parse_program`] always returns a program,
/// possibly with statements missing where errors occurred.
///
/// # Example
/// ```
/// use simian::interpreter::parser::core::Parser;
///
/// let (program, errors) = Parser::from_source("let x = 1 + 2; x").parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.statements.len(), 2);
/// ```
pub struct Parser<I: Iterator<Item = Token>> {
    tokens:         I,
    pub(super) current: Token,
    pub(super) peek:    Token,
    errors:         Vec<ParseError>,
}

impl<'src> Parser<Scanner<'src>> {
    /// Creates a parser that scans `source` lazily.
    #[must_use]
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Scanner::new(source))
    }
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Creates a parser over any token stream.
    ///
    /// A stream that ends without an `EOF` token is treated as if one
    /// followed its last token.
    pub fn new(mut tokens: I) -> Self {
        let current = tokens.next()
                            .unwrap_or_else(|| Token::new(TokenKind::Eof, "", 1, 1));
        let peek = Self::next_or_eof(&mut tokens, &current);
        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Parses statements until end of input.
    ///
    /// # Returns
    /// The program together with every diagnostic recorded, in source order.
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        tracing::debug!(statements = program.statements.len(),
                        diagnostics = self.errors.len(),
                        "parsed program");

        (program, self.errors)
    }

    fn next_or_eof(tokens: &mut I, last: &Token) -> Token {
        tokens.next().unwrap_or_else(|| {
                         Token::new(TokenKind::Eof,
                                    "",
                                    last.line,
                                    last.column + last.literal.chars().count())
                     })
    }

    /// Advances the lookahead window by one token. At end of input the
    /// window stays on `EOF`.
    pub(super) fn next_token(&mut self) {
        let next = if self.peek.kind == TokenKind::Eof {
            self.peek.clone()
        } else {
            Self::next_or_eof(&mut self.tokens, &self.peek)
        };
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(super) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(super) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the next token has the required kind; records a
    /// diagnostic otherwise.
    ///
    /// Returns `Some(())` on success so callers can use `?`.
    pub(super) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.error(ParseError::unexpected(kind, &self.peek));
            None
        }
    }

    /// Consumes a `;` if it is the next token.
    pub(super) fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Skips tokens until the current one is `;` or end of input.
    pub(super) fn skip_to_terminator(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    pub(super) fn error(&mut self, error: ParseError) {
        tracing::trace!(%error, "syntax error");
        self.errors.push(error);
    }
}
