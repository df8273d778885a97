//! Token cursor: lookahead, consumption and missing-token recovery.

use aster_diagnostic::DiagnosticBag;
use aster_ir::{Token, TokenKind};

/// Cursor over a token stream that always ends with `EndOfFile`.
///
/// Advancing past the end is a no-op, so the parser can never run off the
/// stream while recovering from errors.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// `tokens` must be non-empty and end with `EndOfFile`.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfFile),
            "token stream must end with EndOfFile"
        );
        Cursor { tokens, pos: 0 }
    }

    /// Used for progress tracking in block recovery.
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfFile)
    }

    /// Consume and return the current token.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind`, or report and fabricate a zero-width one.
    pub(crate) fn expect(&mut self, kind: TokenKind, diagnostics: &mut DiagnosticBag) -> Token {
        if self.check(kind) {
            return self.advance();
        }
        let found = self.current();
        diagnostics.report_unexpected_token(found.span, found.kind, kind);
        Token::missing(kind, found.span.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_ir::Span;

    fn stream() -> Cursor {
        Cursor::new(vec![
            Token::new(TokenKind::Identifier, Span::new(0, 1), "x"),
            Token::new(TokenKind::EndOfFile, Span::point(1), ""),
        ])
    }

    #[test]
    fn advance_stops_at_end() {
        let mut cursor = stream();
        assert_eq!(cursor.advance().kind, TokenKind::Identifier);
        assert_eq!(cursor.advance().kind, TokenKind::EndOfFile);
        assert_eq!(cursor.advance().kind, TokenKind::EndOfFile);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn peek_clamps_to_end() {
        let cursor = stream();
        assert_eq!(cursor.peek(5).kind, TokenKind::EndOfFile);
    }

    #[test]
    fn expect_fabricates_missing_token() {
        let mut cursor = stream();
        let mut diagnostics = DiagnosticBag::new();
        let token = cursor.expect(TokenKind::LParen, &mut diagnostics);
        assert!(token.is_missing());
        assert_eq!(token.span, Span::point(0));
        assert_eq!(cursor.position(), 0);
        assert_eq!(diagnostics.len(), 1);
    }
}
