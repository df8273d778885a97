//! Tokenizer for Aster source text.
//!
//! Built on a `logos` state machine over raw token shapes; this module then
//! decodes literal values, classifies keywords and reports lexical problems.
//! Lexing never fails: bad input becomes a `Bad` token plus a diagnostic, and
//! the stream always ends with exactly one `EndOfFile` token.

use aster_diagnostic::DiagnosticBag;
use aster_ir::{Span, Token, TokenKind, Value};
use logos::Logos;

/// Raw token shapes recognized by logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    #[regex(r#""([^"\n]|"")*""#)]
    String,

    // Longer than the terminated form only when the closing quote is missing.
    #[regex(r#""([^"\n]|"")*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    BangEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
}

impl RawToken {
    fn punctuation(self) -> Option<TokenKind> {
        Some(match self {
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Amp => TokenKind::Amp,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::BangEq => TokenKind::BangEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Number
            | RawToken::String
            | RawToken::UnterminatedString
            | RawToken::Word => return None,
        })
    }
}

/// Tokenize `text`.
///
/// Returns every token, ending with `EndOfFile`, and the lexical
/// diagnostics in source order.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn lex(text: &str) -> (Vec<Token>, DiagnosticBag) {
    let mut tokens = Vec::new();
    let mut diagnostics = DiagnosticBag::new();
    let mut raw = RawToken::lexer(text);

    while let Some(result) = raw.next() {
        let span = Span::from_range(raw.span());
        let slice = raw.slice();
        let token = match result {
            Ok(kind) => cook(kind, slice, span, &mut diagnostics),
            Err(()) => {
                let character = slice.chars().next().unwrap_or('\u{fffd}');
                diagnostics.report_bad_character(span, character);
                Token::new(TokenKind::Bad, span, slice)
            }
        };
        tokens.push(token);
    }

    let end = Span::from_range(text.len()..text.len());
    tokens.push(Token::new(TokenKind::EndOfFile, end, ""));
    tracing::debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "lexed"
    );
    (tokens, diagnostics)
}

/// Turn a raw match into a token, decoding its value.
fn cook(kind: RawToken, slice: &str, span: Span, diagnostics: &mut DiagnosticBag) -> Token {
    match kind {
        RawToken::Number => {
            let value = slice.parse::<i32>().unwrap_or_else(|_| {
                diagnostics.report_invalid_number(span, slice);
                0
            });
            Token::new(TokenKind::Number, span, slice).with_value(Value::Int(value))
        }
        RawToken::String => {
            let contents = unescape(&slice[1..slice.len() - 1]);
            Token::new(TokenKind::String, span, slice).with_value(Value::Str(contents))
        }
        RawToken::UnterminatedString => {
            diagnostics.report_unterminated_string(Span::new(span.start, span.start + 1));
            let contents = unescape(&slice[1..]);
            Token::new(TokenKind::String, span, slice).with_value(Value::Str(contents))
        }
        RawToken::Word => match TokenKind::keyword(slice) {
            Some(TokenKind::True) => {
                Token::new(TokenKind::True, span, slice).with_value(Value::Bool(true))
            }
            Some(TokenKind::False) => {
                Token::new(TokenKind::False, span, slice).with_value(Value::Bool(false))
            }
            Some(keyword) => Token::new(keyword, span, slice),
            None => Token::new(TokenKind::Identifier, span, slice),
        },
        punctuation => {
            let kind = punctuation.punctuation().unwrap_or(TokenKind::Bad);
            Token::new(kind, span, slice)
        }
    }
}

/// Collapse doubled quotes (`""`) into one.
fn unescape(contents: &str) -> String {
    contents.replace("\"\"", "\"")
}
