use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// `Eof` and `Illegal` are never matched by a pattern; [`Scanner`] produces
/// them for the end of input and for unrecognized text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// Identifier tokens; binding names such as `x` or `add_two`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// String literal tokens, such as `"hello"`. No escape sequences.
    #[regex(r#""[^"]*""#)]
    String,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `fn`
    #[token("fn")]
    Function,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `null`
    #[token("null")]
    Null,
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// End of input.
    Eof,
    /// Unrecognized characters or an unterminated string.
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "IDENT",
            Self::Integer => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Bang => "!",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
        };
        write!(f, "{name}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset where it starts, so every
/// token can be given a 1-based line and column.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Skips the remainder of a `//` comment, leaving the newline in place
/// so line tracking still sees it.
fn skip_line_comment(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    let rest = lex.remainder();
    let len = rest.find('\n').unwrap_or(rest.len());
    lex.bump(len);
    logos::Skip
}

/// A single lexical token with its literal text and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's kind.
    pub kind:    TokenKind,
    /// The source text of the token. For strings, the text between the quotes.
    pub literal: String,
    /// 1-based source line.
    pub line:    usize,
    /// 1-based source column, counted in characters.
    pub column:  usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               line,
               column }
    }
}

/// A lazy, non-restartable token stream over a source text.
///
/// The stream yields every token in order and ends with exactly one
/// [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use simian::interpreter::lexer::{Scanner, TokenKind};
///
/// let kinds: Vec<TokenKind> = Scanner::new("let x = 5;").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Let,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// ```
pub struct Scanner<'src> {
    lexer:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at line 1, column 1 of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    TokenKind::lexer(source),
               finished: false, }
    }

    /// Line and column of the byte offset `offset` on the current line.
    fn location(&self, offset: usize) -> (usize, usize) {
        let line_start = self.lexer.extras.line_start.min(offset);
        let column = self.lexer.source()[line_start..offset].chars().count() + 1;
        (self.lexer.extras.line, column)
    }

    /// Accounts for line breaks inside a string literal that was just lexed.
    fn track_string_lines(&mut self) {
        let slice = self.lexer.slice();
        if let Some(last) = slice.rfind('\n') {
            let breaks = slice.matches('\n').count();
            let start = self.lexer.span().start;
            self.lexer.extras.line += breaks;
            self.lexer.extras.line_start = start + last + 1;
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let Some(result) = self.lexer.next() else {
            self.finished = true;
            let (line, column) = self.location(self.lexer.source().len());
            return Some(Token::new(TokenKind::Eof, "", line, column));
        };

        let (line, column) = self.location(self.lexer.span().start);
        let slice = self.lexer.slice();

        let token = match result {
            Ok(TokenKind::String) => {
                let literal = slice[1..slice.len() - 1].to_string();
                self.track_string_lines();
                Token::new(TokenKind::String, literal, line, column)
            },
            Ok(kind) => Token::new(kind, slice, line, column),
            Err(()) => Token::new(TokenKind::Illegal, slice, line, column),
        };

        Some(token)
    }
}
