//! Owned bound-tree rewriting.
//!
//! [`BoundTreeRewriter`] takes each node by value and returns its
//! replacement. Every default method rebuilds the node from its rewritten
//! children in place, reusing the existing boxes, so a pass only overrides
//! the node kinds it actually transforms and everything else flows through
//! without new allocations.

use aster_ir::{
    BoundBinaryOperator, BoundExpression, BoundStatement, BoundUnaryOperator, FunctionSymbol,
    Label, TypeSymbol, Value, VariableSymbol,
};
use aster_stack::ensure_sufficient_stack;

/// Rewrite the contents of a box without reallocating it.
#[inline]
pub fn map_box<T>(mut node: Box<T>, f: impl FnOnce(T) -> T) -> Box<T> {
    *node = f(*node);
    node
}

pub trait BoundTreeRewriter {
    // Statements

    fn rewrite_statement(&mut self, statement: BoundStatement) -> BoundStatement {
        ensure_sufficient_stack(|| match statement {
            BoundStatement::Block(statements) => self.rewrite_block(statements),
            BoundStatement::VariableDeclaration {
                variable,
                initializer,
            } => self.rewrite_variable_declaration(variable, initializer),
            BoundStatement::If {
                condition,
                then_statement,
                else_statement,
            } => self.rewrite_if(condition, then_statement, else_statement),
            BoundStatement::While { condition, body } => self.rewrite_while(condition, body),
            BoundStatement::For {
                variable,
                lower_bound,
                upper_bound,
                body,
            } => self.rewrite_for(variable, lower_bound, upper_bound, body),
            BoundStatement::Expression(expression) => self.rewrite_expression_statement(expression),
            BoundStatement::Label(label) => self.rewrite_label(label),
            BoundStatement::Goto(label) => self.rewrite_goto(label),
            BoundStatement::ConditionalGoto {
                label,
                condition,
                jump_if_true,
            } => self.rewrite_conditional_goto(label, condition, jump_if_true),
        })
    }

    fn rewrite_block(&mut self, statements: Vec<BoundStatement>) -> BoundStatement {
        let statements = statements
            .into_iter()
            .map(|statement| self.rewrite_statement(statement))
            .collect();
        BoundStatement::Block(statements)
    }

    fn rewrite_variable_declaration(
        &mut self,
        variable: VariableSymbol,
        initializer: BoundExpression,
    ) -> BoundStatement {
        let initializer = self.rewrite_expression(initializer);
        BoundStatement::declaration(variable, initializer)
    }

    fn rewrite_if(
        &mut self,
        condition: BoundExpression,
        then_statement: Box<BoundStatement>,
        else_statement: Option<Box<BoundStatement>>,
    ) -> BoundStatement {
        let condition = self.rewrite_expression(condition);
        let then_statement = map_box(then_statement, |s| self.rewrite_statement(s));
        let else_statement = else_statement.map(|e| map_box(e, |s| self.rewrite_statement(s)));
        BoundStatement::If {
            condition,
            then_statement,
            else_statement,
        }
    }

    fn rewrite_while(
        &mut self,
        condition: BoundExpression,
        body: Box<BoundStatement>,
    ) -> BoundStatement {
        let condition = self.rewrite_expression(condition);
        let body = map_box(body, |s| self.rewrite_statement(s));
        BoundStatement::While { condition, body }
    }

    fn rewrite_for(
        &mut self,
        variable: VariableSymbol,
        lower_bound: BoundExpression,
        upper_bound: BoundExpression,
        body: Box<BoundStatement>,
    ) -> BoundStatement {
        let lower_bound = self.rewrite_expression(lower_bound);
        let upper_bound = self.rewrite_expression(upper_bound);
        let body = map_box(body, |s| self.rewrite_statement(s));
        BoundStatement::For {
            variable,
            lower_bound,
            upper_bound,
            body,
        }
    }

    fn rewrite_expression_statement(&mut self, expression: BoundExpression) -> BoundStatement {
        BoundStatement::Expression(self.rewrite_expression(expression))
    }

    fn rewrite_label(&mut self, label: Label) -> BoundStatement {
        BoundStatement::Label(label)
    }

    fn rewrite_goto(&mut self, label: Label) -> BoundStatement {
        BoundStatement::Goto(label)
    }

    fn rewrite_conditional_goto(
        &mut self,
        label: Label,
        condition: BoundExpression,
        jump_if_true: bool,
    ) -> BoundStatement {
        let condition = self.rewrite_expression(condition);
        BoundStatement::conditional_goto(label, condition, jump_if_true)
    }

    // Expressions

    fn rewrite_expression(&mut self, expression: BoundExpression) -> BoundExpression {
        ensure_sufficient_stack(|| match expression {
            BoundExpression::Literal(value) => self.rewrite_literal(value),
            BoundExpression::Variable(variable) => self.rewrite_variable(variable),
            BoundExpression::Assignment {
                variable,
                expression,
            } => self.rewrite_assignment(variable, expression),
            BoundExpression::Unary { op, operand } => self.rewrite_unary(op, operand),
            BoundExpression::Binary { left, op, right } => self.rewrite_binary(left, op, right),
            BoundExpression::Conversion { ty, expression } => {
                self.rewrite_conversion(ty, expression)
            }
            BoundExpression::Call {
                function,
                arguments,
            } => self.rewrite_call(function, arguments),
            BoundExpression::Error => BoundExpression::Error,
        })
    }

    fn rewrite_literal(&mut self, value: Value) -> BoundExpression {
        BoundExpression::Literal(value)
    }

    fn rewrite_variable(&mut self, variable: VariableSymbol) -> BoundExpression {
        BoundExpression::Variable(variable)
    }

    fn rewrite_assignment(
        &mut self,
        variable: VariableSymbol,
        expression: Box<BoundExpression>,
    ) -> BoundExpression {
        let expression = map_box(expression, |e| self.rewrite_expression(e));
        BoundExpression::Assignment {
            variable,
            expression,
        }
    }

    fn rewrite_unary(
        &mut self,
        op: BoundUnaryOperator,
        operand: Box<BoundExpression>,
    ) -> BoundExpression {
        let operand = map_box(operand, |e| self.rewrite_expression(e));
        BoundExpression::Unary { op, operand }
    }

    fn rewrite_binary(
        &mut self,
        left: Box<BoundExpression>,
        op: BoundBinaryOperator,
        right: Box<BoundExpression>,
    ) -> BoundExpression {
        let left = map_box(left, |e| self.rewrite_expression(e));
        let right = map_box(right, |e| self.rewrite_expression(e));
        BoundExpression::Binary { left, op, right }
    }

    fn rewrite_conversion(
        &mut self,
        ty: TypeSymbol,
        expression: Box<BoundExpression>,
    ) -> BoundExpression {
        let expression = map_box(expression, |e| self.rewrite_expression(e));
        BoundExpression::Conversion { ty, expression }
    }

    fn rewrite_call(
        &mut self,
        function: FunctionSymbol,
        arguments: Vec<BoundExpression>,
    ) -> BoundExpression {
        let arguments = arguments
            .into_iter()
            .map(|argument| self.rewrite_expression(argument))
            .collect();
        BoundExpression::Call {
            function,
            arguments,
        }
    }
}
