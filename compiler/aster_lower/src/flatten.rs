//! Merge nested blocks into one statement list.

use aster_ir::BoundStatement;

/// Flatten `statement` into its non-block statements in execution order.
///
/// Uses an explicit stack instead of recursion: children of a block are
/// pushed in reverse so they pop in source order.
pub fn flatten(statement: BoundStatement) -> Vec<BoundStatement> {
    let mut flat = Vec::new();
    let mut stack = vec![statement];

    while let Some(current) = stack.pop() {
        match current {
            BoundStatement::Block(children) => stack.extend(children.into_iter().rev()),
            other => flat.push(other),
        }
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_ir::{BoundExpression, Label, Value};
    use pretty_assertions::assert_eq;

    fn expr(n: i32) -> BoundStatement {
        BoundStatement::Expression(BoundExpression::Literal(Value::Int(n)))
    }

    #[test]
    fn preserves_order_across_nesting() {
        let tree = BoundStatement::Block(vec![
            expr(1),
            BoundStatement::Block(vec![
                expr(2),
                BoundStatement::Block(vec![expr(3)]),
                expr(4),
            ]),
            BoundStatement::Label(Label::new(1)),
            expr(5),
        ]);
        let flat = flatten(tree);
        assert_eq!(
            flat,
            vec![
                expr(1),
                expr(2),
                expr(3),
                expr(4),
                BoundStatement::Label(Label::new(1)),
                expr(5)
            ]
        );
    }

    #[test]
    fn empty_blocks_vanish() {
        let tree = BoundStatement::Block(vec![
            BoundStatement::Block(Vec::new()),
            BoundStatement::Block(vec![BoundStatement::Block(Vec::new())]),
        ]);
        assert!(flatten(tree).is_empty());
    }

    #[test]
    fn single_statement_is_its_own_program() {
        assert_eq!(flatten(expr(7)), vec![expr(7)]);
    }

    #[test]
    fn very_deep_nesting() {
        let mut tree = expr(0);
        for _ in 0..100_000 {
            tree = BoundStatement::Block(vec![tree]);
        }
        assert_eq!(flatten(tree), vec![expr(0)]);
    }
}
