use thiserror::Error;

use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token kind was required next but another one was found.
    #[error("Error on line {line}, column {column}: expected next token to be {expected}, got {found} instead.")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind actually found.
        found:    TokenKind,
        /// The source line of the offending token.
        line:     usize,
        /// The source column of the offending token.
        column:   usize,
    },
    /// No expression can start with the current token.
    #[error("Error on line {line}, column {column}: no prefix parse function for {kind} found.")]
    NoPrefixParseFn {
        /// The kind of the token in expression position.
        kind:   TokenKind,
        /// The source line of the offending token.
        line:   usize,
        /// The source column of the offending token.
        column: usize,
    },
    /// An integer literal does not fit in a signed 64-bit integer.
    #[error("Error on line {line}, column {column}: could not parse {literal:?} as integer.")]
    InvalidInteger {
        /// The literal text as written.
        literal: String,
        /// The source line of the literal.
        line:    usize,
        /// The source column of the literal.
        column:  usize,
    },
}

impl ParseError {
    /// Builds an [`ParseError::UnexpectedToken`] for `found`.
    #[must_use]
    pub const fn unexpected(expected: TokenKind, found: &Token) -> Self {
        Self::UnexpectedToken { expected,
                                found: found.kind,
                                line: found.line,
                                column: found.column }
    }

    /// Builds an [`ParseError::NoPrefixParseFn`] for `token`.
    #[must_use]
    pub const fn no_prefix(token: &Token) -> Self {
        Self::NoPrefixParseFn { kind:   token.kind,
                                line:   token.line,
                                column: token.column, }
    }

    /// The source line the diagnostic points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::InvalidInteger { line, .. } => *line,
        }
    }
}
