//! Debug-mode checks on lowered programs.

use aster_ir::BoundStatement;
use rustc_hash::FxHashSet;

/// Assert that `program` is in the form the evaluator accepts.
///
/// Checked: no blocks and no structured control flow remain, every label is
/// declared once, and every jump targets a declared label. Panics with a
/// descriptive message on violation. [`lower`](crate::lower) calls it in
/// debug builds only.
pub fn validate(program: &[BoundStatement]) {
    let mut labels = FxHashSet::default();
    for statement in program {
        assert!(
            statement.is_primitive() && !matches!(statement, BoundStatement::Block(_)),
            "lowered program contains a {} statement",
            statement.kind_name()
        );
        if let BoundStatement::Label(label) = statement {
            assert!(labels.insert(*label), "{label} is declared twice");
        }
    }

    for statement in program {
        if let BoundStatement::Goto(label) | BoundStatement::ConditionalGoto { label, .. } = statement
        {
            assert!(labels.contains(label), "jump to undeclared {label}");
        }
    }
}
