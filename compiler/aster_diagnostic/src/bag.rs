//! Append-only diagnostic collection with the message templates every phase
//! reports through.
//!
//! Each `report_*` method builds one diagnostic with a fixed message shape
//! and appends it; nothing here returns an error or aborts the caller.

use aster_ir::{Span, TokenKind, TypeSymbol};

use crate::{Diagnostic, ErrorCode};

/// Ordered list of diagnostics for one phase run.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        DiagnosticBag::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::trace!(code = %diagnostic.code, message = %diagnostic.message, "diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Append `other` after the diagnostics already collected.
    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in other {
            self.push(diagnostic);
        }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    // Lexical

    pub fn report_invalid_number(&mut self, span: Span, text: &str) {
        self.push(
            Diagnostic::error(ErrorCode::E0003)
                .with_message(format!("the number `{text}` is not a valid `int`"))
                .with_label(span, "out of range"),
        );
    }

    pub fn report_bad_character(&mut self, span: Span, character: char) {
        self.push(
            Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("bad character `{}`", character.escape_debug()))
                .with_label(span, "not valid here"),
        );
    }

    pub fn report_unterminated_string(&mut self, span: Span) {
        self.push(
            Diagnostic::error(ErrorCode::E0001)
                .with_message("unterminated string literal")
                .with_label(span, "missing closing `\"`"),
        );
    }

    // Syntactic

    pub fn report_unexpected_token(&mut self, span: Span, found: TokenKind, expected: TokenKind) {
        self.push(
            Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("unexpected token: expected {expected}, found {found}"))
                .with_label(span, format!("expected {expected}")),
        );
    }

    // Semantic

    pub fn report_undefined_unary_operator(
        &mut self,
        span: Span,
        operator: &str,
        operand: TypeSymbol,
    ) {
        self.push(
            Diagnostic::error(ErrorCode::E2002)
                .with_message(format!(
                    "unary operator `{operator}` is not defined for type `{operand}`"
                ))
                .with_label(span, "no matching operator"),
        );
    }

    pub fn report_undefined_binary_operator(
        &mut self,
        span: Span,
        operator: &str,
        left: TypeSymbol,
        right: TypeSymbol,
    ) {
        self.push(
            Diagnostic::error(ErrorCode::E2003)
                .with_message(format!(
                    "binary operator `{operator}` is not defined for types `{left}` and `{right}`"
                ))
                .with_label(span, "no matching operator"),
        );
    }

    pub fn report_undefined_name(&mut self, span: Span, name: &str) {
        self.push(
            Diagnostic::error(ErrorCode::E2004)
                .with_message(format!("undefined name `{name}`"))
                .with_label(span, "not found in this scope"),
        );
    }

    pub fn report_cannot_convert(&mut self, span: Span, from: TypeSymbol, to: TypeSymbol) {
        self.push(
            Diagnostic::error(ErrorCode::E2001)
                .with_message(format!("cannot convert type `{from}` to `{to}`"))
                .with_label(span, format!("expected `{to}`, found `{from}`")),
        );
    }

    pub fn report_duplicate_declaration(&mut self, span: Span, name: &str) {
        self.push(
            Diagnostic::error(ErrorCode::E2005)
                .with_message(format!("`{name}` is already declared in this scope"))
                .with_label(span, "redeclared here"),
        );
    }

    pub fn report_cannot_assign(&mut self, span: Span, name: &str) {
        self.push(
            Diagnostic::error(ErrorCode::E2006)
                .with_message(format!("cannot assign to read-only variable `{name}`"))
                .with_label(span, "assignment to `let` binding")
                .with_note(format!("declare `{name}` with `var` to make it assignable")),
        );
    }

    pub fn report_undefined_function(&mut self, span: Span, name: &str) {
        self.push(
            Diagnostic::error(ErrorCode::E2007)
                .with_message(format!("undefined function `{name}`"))
                .with_label(span, "not found in this scope"),
        );
    }

    pub fn report_wrong_argument_count(
        &mut self,
        span: Span,
        name: &str,
        expected: usize,
        actual: usize,
    ) {
        let plural = if expected == 1 { "" } else { "s" };
        self.push(
            Diagnostic::error(ErrorCode::E2008)
                .with_message(format!(
                    "function `{name}` takes {expected} argument{plural} but {actual} were supplied"
                ))
                .with_label(span, format!("expected {expected} argument{plural}")),
        );
    }

    pub fn report_wrong_argument_type(
        &mut self,
        span: Span,
        parameter: &str,
        expected: TypeSymbol,
        actual: TypeSymbol,
    ) {
        self.push(
            Diagnostic::error(ErrorCode::E2009)
                .with_message(format!(
                    "parameter `{parameter}` requires a value of type `{expected}` but was given `{actual}`"
                ))
                .with_label(span, format!("expected `{expected}`")),
        );
    }

    pub fn report_expression_must_have_value(&mut self, span: Span) {
        self.push(
            Diagnostic::error(ErrorCode::E2010)
                .with_message("expression must have a value")
                .with_label(span, "this expression is `void`"),
        );
    }
}

impl IntoIterator for DiagnosticBag {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
