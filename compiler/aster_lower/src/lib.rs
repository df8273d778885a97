//! Lowering of bound trees into flat, jump-based programs.
//!
//! ```text
//! Source → Lex → Parse → Bind → **Lower** → Evaluate
//! ```
//!
//! [`lower`] removes `if`, `while` and `for` by rewriting them into labels,
//! unconditional jumps and conditional jumps, then [`flatten`]s the nested
//! blocks into a single statement list. The evaluator runs that list with a
//! program counter and never recurses on statements.

mod flatten;
mod lower;
mod rewriter;
mod validate;

use aster_ir::BoundStatement;

pub use flatten::flatten;
pub use rewriter::{map_box, BoundTreeRewriter};
pub use validate::validate;

/// Lower `statement` and flatten the result into a program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn lower(statement: BoundStatement) -> Vec<BoundStatement> {
    let mut lowerer = lower::Lowerer::default();
    let rewritten = lowerer.rewrite_statement(statement);
    let program = flatten(rewritten);

    #[cfg(debug_assertions)]
    validate(&program);

    tracing::debug!(
        statements = program.len(),
        labels = lowerer.label_count(),
        "lowered"
    );
    program
}
