//! Plain-text rendering of bound trees.
//!
//! Used by `--show-tree`/`--show-program` and by tests that compare lowered
//! output. Nested operator operands are always parenthesized so the text is
//! unambiguous without a precedence table.

use std::fmt::{self, Write};

use super::{BoundExpression, BoundStatement};
use crate::Value;

const INDENT: &str = "    ";

impl fmt::Display for BoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundExpression::Literal(Value::Str(text)) => {
                write!(f, "\"{}\"", text.replace('"', "\"\""))
            }
            BoundExpression::Literal(value) => write!(f, "{value}"),
            BoundExpression::Variable(variable) => f.write_str(variable.name()),
            BoundExpression::Assignment {
                variable,
                expression,
            } => write!(f, "{} = {expression}", variable.name()),
            BoundExpression::Unary { op, operand } => {
                f.write_str(op.token.text().unwrap_or("?"))?;
                write_operand(f, operand)
            }
            BoundExpression::Binary { left, op, right } => {
                write_operand(f, left)?;
                write!(f, " {} ", op.token.text().unwrap_or("?"))?;
                write_operand(f, right)
            }
            BoundExpression::Conversion { ty, expression } => write!(f, "{ty}({expression})"),
            BoundExpression::Call {
                function,
                arguments,
            } => {
                write!(f, "{}(", function.name)?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_char(')')
            }
            BoundExpression::Error => f.write_char('?'),
        }
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &BoundExpression) -> fmt::Result {
    match operand {
        BoundExpression::Binary { .. } | BoundExpression::Assignment { .. } => {
            write!(f, "({operand})")
        }
        _ => write!(f, "{operand}"),
    }
}

impl fmt::Display for BoundStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

/// Write a nested statement: blocks stay at `depth`, anything else is
/// indented one level.
fn write_body(f: &mut fmt::Formatter<'_>, body: &BoundStatement, depth: usize) -> fmt::Result {
    match body {
        BoundStatement::Block(_) => write_statement(f, body, depth),
        _ => write_statement(f, body, depth + 1),
    }
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &BoundStatement, depth: usize) -> fmt::Result {
    match statement {
        BoundStatement::Block(statements) => {
            write_indent(f, depth)?;
            f.write_str("{\n")?;
            for statement in statements {
                write_statement(f, statement, depth + 1)?;
            }
            write_indent(f, depth)?;
            f.write_str("}\n")
        }
        BoundStatement::VariableDeclaration {
            variable,
            initializer,
        } => {
            write_indent(f, depth)?;
            let keyword = if variable.is_read_only() { "let" } else { "var" };
            writeln!(f, "{keyword} {} = {initializer}", variable.name())
        }
        BoundStatement::If {
            condition,
            then_statement,
            else_statement,
        } => {
            write_indent(f, depth)?;
            writeln!(f, "if {condition}")?;
            write_body(f, then_statement, depth)?;
            if let Some(else_statement) = else_statement {
                write_indent(f, depth)?;
                f.write_str("else\n")?;
                write_body(f, else_statement, depth)?;
            }
            Ok(())
        }
        BoundStatement::While { condition, body } => {
            write_indent(f, depth)?;
            writeln!(f, "while {condition}")?;
            write_body(f, body, depth)
        }
        BoundStatement::For {
            variable,
            lower_bound,
            upper_bound,
            body,
        } => {
            write_indent(f, depth)?;
            writeln!(f, "for {} = {lower_bound} to {upper_bound}", variable.name())?;
            write_body(f, body, depth)
        }
        BoundStatement::Expression(expression) => {
            write_indent(f, depth)?;
            writeln!(f, "{expression}")
        }
        BoundStatement::Label(label) => {
            write_indent(f, depth.saturating_sub(1))?;
            writeln!(f, "{label}:")
        }
        BoundStatement::Goto(label) => {
            write_indent(f, depth)?;
            writeln!(f, "goto {label}")
        }
        BoundStatement::ConditionalGoto {
            label,
            condition,
            jump_if_true,
        } => {
            write_indent(f, depth)?;
            let keyword = if *jump_if_true { "if" } else { "unless" };
            writeln!(f, "goto {label} {keyword} {condition}")
        }
    }
}
