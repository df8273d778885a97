//! The goto-table evaluator.
//!
//! Statements run in a flat loop driven by a program counter; only
//! expressions are evaluated recursively. A pre-pass maps every label to
//! the index just past it, so a jump is a table lookup.

use aster_ir::{BinaryOpKind, BoundExpression, BoundStatement, FunctionSymbol, Label, Value, VariableSymbol};
use aster_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::errors::{EvalError, EvalResult};
use crate::operators::{convert, evaluate_binary, evaluate_unary};
use crate::runtime::Runtime;

/// Variable values, keyed by symbol identity.
///
/// Owned by the session and reused across submissions, so values persist
/// exactly as long as the declarations that introduced them.
pub type VariableStore = FxHashMap<VariableSymbol, Value>;

/// Run a lowered program.
///
/// Returns the value of the last declaration or expression statement
/// executed, or `None` when the program ran none or the last one was a
/// `void` call. On a fault, store writes made before it are kept.
///
/// # Panics
///
/// If `program` is not in lowered form: structured statements, jumps to
/// undeclared labels, or `Error` expressions.
#[tracing::instrument(level = "debug", skip_all, fields(statements = program.len()))]
pub fn evaluate(
    program: &[BoundStatement],
    store: &mut VariableStore,
    runtime: &mut Runtime,
) -> EvalResult<Option<Value>> {
    let mut evaluator = Evaluator {
        labels: label_table(program),
        store,
        runtime,
    };
    evaluator.run(program)
}

fn label_table(program: &[BoundStatement]) -> FxHashMap<Label, usize> {
    program
        .iter()
        .enumerate()
        .filter_map(|(index, statement)| match statement {
            BoundStatement::Label(label) => Some((*label, index + 1)),
            _ => None,
        })
        .collect()
}

struct Evaluator<'a> {
    labels: FxHashMap<Label, usize>,
    store: &'a mut VariableStore,
    runtime: &'a mut Runtime,
}

impl Evaluator<'_> {
    fn run(&mut self, program: &[BoundStatement]) -> EvalResult<Option<Value>> {
        let mut last = None;
        let mut pc = 0;
        while let Some(statement) = program.get(pc) {
            match statement {
                BoundStatement::VariableDeclaration {
                    variable,
                    initializer,
                } => {
                    let value = self.evaluate_expression(initializer)?;
                    self.store.insert(variable.clone(), value.clone());
                    last = Some(value);
                    pc += 1;
                }
                BoundStatement::Expression(expression) => {
                    last = self.evaluate_statement_expression(expression)?;
                    pc += 1;
                }
                BoundStatement::Label(_) => pc += 1,
                BoundStatement::Goto(label) => pc = self.target(*label),
                BoundStatement::ConditionalGoto {
                    label,
                    condition,
                    jump_if_true,
                } => {
                    if self.evaluate_condition(condition)? == *jump_if_true {
                        pc = self.target(*label);
                    } else {
                        pc += 1;
                    }
                }
                BoundStatement::Block(_)
                | BoundStatement::If { .. }
                | BoundStatement::While { .. }
                | BoundStatement::For { .. } => {
                    panic!("{} statement reached the evaluator unlowered", statement.kind_name())
                }
            }
        }
        Ok(last)
    }

    fn target(&self, label: Label) -> usize {
        let Some(&index) = self.labels.get(&label) else {
            panic!("jump to undeclared {label}");
        };
        tracing::trace!(%label, index, "jump");
        index
    }

    /// An expression statement may be a `void` call.
    fn evaluate_statement_expression(
        &mut self,
        expression: &BoundExpression,
    ) -> EvalResult<Option<Value>> {
        match expression {
            BoundExpression::Call {
                function,
                arguments,
            } => self.evaluate_call(function, arguments),
            _ => self.evaluate_expression(expression).map(Some),
        }
    }

    fn evaluate_condition(&mut self, condition: &BoundExpression) -> EvalResult<bool> {
        match self.evaluate_expression(condition)? {
            Value::Bool(b) => Ok(b),
            other => panic!("condition evaluated to {:?}", other.ty()),
        }
    }

    fn evaluate_expression(&mut self, expression: &BoundExpression) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expression {
            BoundExpression::Literal(value) => Ok(value.clone()),
            BoundExpression::Variable(variable) => {
                self.store
                    .get(variable)
                    .cloned()
                    .ok_or_else(|| EvalError::Unassigned {
                        name: variable.name().to_owned(),
                    })
            }
            BoundExpression::Assignment {
                variable,
                expression,
            } => {
                let value = self.evaluate_expression(expression)?;
                self.store.insert(variable.clone(), value.clone());
                Ok(value)
            }
            BoundExpression::Unary { op, operand } => {
                let operand = self.evaluate_expression(operand)?;
                evaluate_unary(op, operand)
            }
            BoundExpression::Binary { left, op, right } => {
                let left = self.evaluate_expression(left)?;
                match (op.kind, &left) {
                    (BinaryOpKind::LogicalAnd, Value::Bool(false)) => return Ok(Value::Bool(false)),
                    (BinaryOpKind::LogicalOr, Value::Bool(true)) => return Ok(Value::Bool(true)),
                    _ => {}
                }
                let right = self.evaluate_expression(right)?;
                evaluate_binary(op, left, right)
            }
            BoundExpression::Conversion { ty, expression } => {
                let value = self.evaluate_expression(expression)?;
                convert(value, *ty)
            }
            BoundExpression::Call {
                function,
                arguments,
            } => match self.evaluate_call(function, arguments)? {
                Some(value) => Ok(value),
                None => panic!("`void` call to `{}` used as a value", function.name),
            },
            BoundExpression::Error => panic!("error expression reached the evaluator"),
        })
    }

    fn evaluate_call(
        &mut self,
        function: &FunctionSymbol,
        arguments: &[BoundExpression],
    ) -> EvalResult<Option<Value>> {
        let arguments = arguments
            .iter()
            .map(|argument| self.evaluate_expression(argument))
            .collect::<EvalResult<Vec<_>>>()?;
        self.runtime.call(function.builtin, &arguments)
    }
}

#[cfg(test)]
mod tests;
