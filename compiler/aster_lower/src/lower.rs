//! Rewrite `if`, `while` and `for` into labels and jumps.
//!
//! Each structured statement becomes a block of primitive statements, and
//! that block is rewritten again so nested constructs reduce too:
//!
//! ```text
//! if C T            goto end unless C; T; end:
//! if C T else E     goto else unless C; T; goto end; else: E; end:
//! while C B         goto check; continue: B; check: goto continue if C; end:
//! for v = L to U B  var v = L; let upperBound = U;
//!                   while v <= upperBound { B; v = v + 1 }
//! ```

use aster_ir::{
    BinaryOpKind, BoundBinaryOperator, BoundExpression, BoundStatement, Label, TokenKind,
    TypeSymbol, Value, VariableSymbol,
};

use crate::rewriter::BoundTreeRewriter;

const LESS_OR_EQUALS: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::LtEq,
    BinaryOpKind::LessOrEquals,
    TypeSymbol::Int,
    TypeSymbol::Bool,
);

const ADDITION: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::Plus,
    BinaryOpKind::Addition,
    TypeSymbol::Int,
    TypeSymbol::Int,
);

/// One lowering pass. Labels are minted from a counter private to the
/// pass, so every label in its output is distinct.
#[derive(Default)]
pub(crate) struct Lowerer {
    label_count: u32,
}

impl Lowerer {
    pub(crate) fn label_count(&self) -> u32 {
        self.label_count
    }

    fn generate_label(&mut self) -> Label {
        self.label_count += 1;
        Label::new(self.label_count)
    }
}

impl BoundTreeRewriter for Lowerer {
    fn rewrite_if(
        &mut self,
        condition: BoundExpression,
        then_statement: Box<BoundStatement>,
        else_statement: Option<Box<BoundStatement>>,
    ) -> BoundStatement {
        let block = match else_statement {
            None => {
                let end = self.generate_label();
                vec![
                    BoundStatement::conditional_goto(end, condition, false),
                    *then_statement,
                    BoundStatement::Label(end),
                ]
            }
            Some(else_statement) => {
                let else_label = self.generate_label();
                let end = self.generate_label();
                vec![
                    BoundStatement::conditional_goto(else_label, condition, false),
                    *then_statement,
                    BoundStatement::Goto(end),
                    BoundStatement::Label(else_label),
                    *else_statement,
                    BoundStatement::Label(end),
                ]
            }
        };
        self.rewrite_statement(BoundStatement::Block(block))
    }

    fn rewrite_while(
        &mut self,
        condition: BoundExpression,
        body: Box<BoundStatement>,
    ) -> BoundStatement {
        let continue_label = self.generate_label();
        let check = self.generate_label();
        let end = self.generate_label();
        let block = vec![
            BoundStatement::Goto(check),
            BoundStatement::Label(continue_label),
            *body,
            BoundStatement::Label(check),
            BoundStatement::conditional_goto(continue_label, condition, true),
            BoundStatement::Label(end),
        ];
        self.rewrite_statement(BoundStatement::Block(block))
    }

    fn rewrite_for(
        &mut self,
        variable: VariableSymbol,
        lower_bound: BoundExpression,
        upper_bound: BoundExpression,
        body: Box<BoundStatement>,
    ) -> BoundStatement {
        let upper = VariableSymbol::new("upperBound", true, TypeSymbol::Int);

        let condition = BoundExpression::binary(
            BoundExpression::Variable(variable.clone()),
            LESS_OR_EQUALS,
            BoundExpression::Variable(upper.clone()),
        );
        let increment = BoundStatement::Expression(BoundExpression::assignment(
            variable.clone(),
            BoundExpression::binary(
                BoundExpression::Variable(variable.clone()),
                ADDITION,
                BoundExpression::Literal(Value::Int(1)),
            ),
        ));
        let loop_ = BoundStatement::While {
            condition,
            body: Box::new(BoundStatement::Block(vec![*body, increment])),
        };

        let block = vec![
            BoundStatement::declaration(variable, lower_bound),
            BoundStatement::declaration(upper, upper_bound),
            loop_,
        ];
        self.rewrite_statement(BoundStatement::Block(block))
    }
}
