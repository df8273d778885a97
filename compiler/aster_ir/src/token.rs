//! Lexical tokens.

use std::fmt;

use crate::{Span, Value};

/// Token kinds produced by the lexer.
///
/// Trivia (whitespace) never reaches the token stream.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals and names
    Number,
    String,
    Identifier,

    // Keywords
    True,
    False,
    Var,
    Let,
    If,
    Else,
    While,
    For,
    To,

    // Punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Tilde,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,
    Caret,
    Eq,
    EqEq,
    BangEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // Special
    Bad,
    EndOfFile,
}

impl TokenKind {
    /// Keyword kind for `text`, if it is a reserved word.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "var" => TokenKind::Var,
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "to" => TokenKind::To,
            _ => return None,
        })
    }

    /// Fixed source text, for kinds whose spelling never varies.
    pub fn text(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Var => "var",
            TokenKind::Let => "let",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::Tilde => "~",
            TokenKind::Amp => "&",
            TokenKind::AmpAmp => "&&",
            TokenKind::Pipe => "|",
            TokenKind::PipePipe => "||",
            TokenKind::Caret => "^",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::BangEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Number
            | TokenKind::String
            | TokenKind::Identifier
            | TokenKind::Bad
            | TokenKind::EndOfFile => return None,
        })
    }

    /// Binding power of a prefix operator; 0 when `self` is not one.
    pub fn unary_precedence(self) -> u8 {
        match self {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang | TokenKind::Tilde => 6,
            _ => 0,
        }
    }

    /// Binding power of an infix operator; 0 when `self` is not one.
    pub fn binary_precedence(self) -> u8 {
        match self {
            TokenKind::Star | TokenKind::Slash => 5,
            TokenKind::Plus | TokenKind::Minus => 4,
            TokenKind::EqEq
            | TokenKind::BangEq
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq => 3,
            TokenKind::Amp | TokenKind::AmpAmp => 2,
            TokenKind::Pipe | TokenKind::PipePipe | TokenKind::Caret => 1,
            _ => 0,
        }
    }

    /// Human-readable name used in "expected X, found Y" messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::String => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Bad => "bad token",
            TokenKind::EndOfFile => "end of input",
            other => other.text().unwrap_or("token"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source span and raw text.
///
/// Literal tokens also carry their decoded value: the integer for numbers
/// (0 when the literal did not fit) and the unescaped contents for strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
    pub value: Option<Value>,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, text: impl Into<String>) -> Self {
        Token {
            kind,
            span,
            text: text.into(),
            value: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Zero-width stand-in inserted by the parser for a missing token.
    pub fn missing(kind: TokenKind, at: u32) -> Self {
        Token::new(kind, Span::point(at), "")
    }

    /// Whether this token was fabricated by error recovery.
    pub fn is_missing(&self) -> bool {
        self.span.is_empty() && self.kind != TokenKind::EndOfFile
    }
}
