//! Parser for Aster submissions.
//!
//! A submission is a single statement. [`parse`] lexes the text, drops `Bad`
//! tokens (already reported by the lexer) and builds a [`CompilationUnit`]
//! by recursive descent, with precedence climbing for binary operators.
//!
//! The parser never fails. A missing token is reported as an unexpected
//! token and replaced by a zero-width stand-in, so the tree always has the
//! shape the grammar promises and the binder can run on it.

mod cursor;
mod grammar;

use aster_diagnostic::DiagnosticBag;
use aster_ir::syntax::CompilationUnit;
use aster_ir::{SourceText, TokenKind};

use crate::cursor::Cursor;

/// A parsed submission: its source, its root and every lexical and
/// syntactic diagnostic in source order.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    pub source: SourceText,
    pub root: CompilationUnit,
    pub diagnostics: DiagnosticBag,
}

impl SyntaxTree {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Parse one submission.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(text: impl Into<String>) -> SyntaxTree {
    let source = SourceText::new(text);
    let (tokens, mut diagnostics) = aster_lexer::lex(source.as_str());
    let tokens = tokens
        .into_iter()
        .filter(|token| token.kind != TokenKind::Bad)
        .collect();

    let mut parser = grammar::Parser::new(Cursor::new(tokens));
    let root = parser.parse_compilation_unit();
    diagnostics.extend(parser.into_diagnostics());

    tracing::debug!(diagnostics = diagnostics.len(), "parsed");
    SyntaxTree {
        source,
        root,
        diagnostics,
    }
}
