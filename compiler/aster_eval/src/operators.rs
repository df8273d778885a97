//! Operator and conversion semantics on runtime values.
//!
//! Dispatch is on the operator kind and the operand tags together:
//! `Addition` sums two ints and concatenates two strings. The binder only
//! produces operator/operand combinations from its tables, so any other
//! pairing is an internal error.
//!
//! All `int` arithmetic is checked; wrapping is never observable.

use aster_ir::{BinaryOpKind, BoundBinaryOperator, BoundUnaryOperator, TypeSymbol, UnaryOpKind, Value};

use crate::errors::{division_by_zero, invalid_conversion, overflow, EvalError, EvalResult};

pub fn evaluate_unary(op: &BoundUnaryOperator, operand: Value) -> EvalResult<Value> {
    match (op.kind, operand) {
        (UnaryOpKind::Identity, Value::Int(n)) => Ok(Value::Int(n)),
        (UnaryOpKind::Negation, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::NegationOverflow { operand: n }),
        (UnaryOpKind::OnesComplement, Value::Int(n)) => Ok(Value::Int(!n)),
        (UnaryOpKind::LogicalNegation, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (kind, operand) => unreachable!("unary {kind:?} applied to {:?}", operand.ty()),
    }
}

/// Evaluate a binary operator whose operands are both already evaluated.
///
/// `&&` and `||` arrive here only when the left operand did not decide
/// the result.
pub fn evaluate_binary(op: &BoundBinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(l), Value::Int(r)) => int_binary(op, l, r),
        (Value::Bool(l), Value::Bool(r)) => Ok(Value::Bool(bool_binary(op.kind, l, r))),
        (Value::Str(l), Value::Str(r)) => Ok(string_binary(op.kind, l, &r)),
        (left, right) => unreachable!(
            "binary {:?} applied to {:?} and {:?}",
            op.kind,
            left.ty(),
            right.ty()
        ),
    }
}

fn int_binary(op: &BoundBinaryOperator, l: i32, r: i32) -> EvalResult<Value> {
    let checked = |result: Option<i32>| {
        result
            .map(Value::Int)
            .ok_or_else(|| overflow(l, op.token.text().unwrap_or("?"), r))
    };
    match op.kind {
        BinaryOpKind::Addition => checked(l.checked_add(r)),
        BinaryOpKind::Subtraction => checked(l.checked_sub(r)),
        BinaryOpKind::Multiplication => checked(l.checked_mul(r)),
        BinaryOpKind::Division => {
            if r == 0 {
                return Err(division_by_zero());
            }
            // i32::MIN / -1
            checked(l.checked_div(r))
        }
        BinaryOpKind::BitwiseAnd => Ok(Value::Int(l & r)),
        BinaryOpKind::BitwiseOr => Ok(Value::Int(l | r)),
        BinaryOpKind::BitwiseXor => Ok(Value::Int(l ^ r)),
        BinaryOpKind::Equals => Ok(Value::Bool(l == r)),
        BinaryOpKind::NotEquals => Ok(Value::Bool(l != r)),
        BinaryOpKind::Less => Ok(Value::Bool(l < r)),
        BinaryOpKind::LessOrEquals => Ok(Value::Bool(l <= r)),
        BinaryOpKind::Greater => Ok(Value::Bool(l > r)),
        BinaryOpKind::GreaterOrEquals => Ok(Value::Bool(l >= r)),
        kind @ (BinaryOpKind::LogicalAnd | BinaryOpKind::LogicalOr) => {
            unreachable!("{kind:?} applied to int operands")
        }
    }
}

fn bool_binary(kind: BinaryOpKind, l: bool, r: bool) -> bool {
    match kind {
        BinaryOpKind::LogicalAnd | BinaryOpKind::BitwiseAnd => l & r,
        BinaryOpKind::LogicalOr | BinaryOpKind::BitwiseOr => l | r,
        BinaryOpKind::BitwiseXor | BinaryOpKind::NotEquals => l ^ r,
        BinaryOpKind::Equals => l == r,
        kind => unreachable!("{kind:?} applied to bool operands"),
    }
}

fn string_binary(kind: BinaryOpKind, mut l: String, r: &str) -> Value {
    match kind {
        BinaryOpKind::Addition => {
            l.push_str(r);
            Value::Str(l)
        }
        BinaryOpKind::Equals => Value::Bool(l == r),
        BinaryOpKind::NotEquals => Value::Bool(l != r),
        kind => unreachable!("{kind:?} applied to string operands"),
    }
}

/// Convert `value` to `ty`.
///
/// Anything converts to `string`. Strings convert to `int` when they hold
/// a decimal integer (surrounding whitespace allowed) and to `bool` when
/// they spell `true` or `false` in any case.
pub fn convert(value: Value, ty: TypeSymbol) -> EvalResult<Value> {
    if value.ty() == ty {
        return Ok(value);
    }
    match (value, ty) {
        (value, TypeSymbol::String) => Ok(Value::Str(value.to_string())),
        (Value::Str(text), TypeSymbol::Int) => text
            .trim()
            .parse::<i32>()
            .map(Value::Int)
            .map_err(|_| invalid_conversion(&text, ty)),
        (Value::Str(text), TypeSymbol::Bool) => {
            let trimmed = text.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(invalid_conversion(&text, ty))
            }
        }
        (value, ty) => unreachable!("no conversion from {:?} to {ty:?}", value.ty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aster_ir::TokenKind;
    use pretty_assertions::assert_eq;

    fn int_op(token: TokenKind, kind: BinaryOpKind) -> BoundBinaryOperator {
        BoundBinaryOperator::new(token, kind, TypeSymbol::Int, TypeSymbol::Int)
    }

    #[test]
    fn addition_depends_on_operand_type() {
        let int_add = int_op(TokenKind::Plus, BinaryOpKind::Addition);
        let string_add = BoundBinaryOperator::new(
            TokenKind::Plus,
            BinaryOpKind::Addition,
            TypeSymbol::String,
            TypeSymbol::String,
        );
        assert_eq!(
            evaluate_binary(&int_add, Value::Int(2), Value::Int(3)),
            Ok(Value::Int(5))
        );
        assert_eq!(
            evaluate_binary(&string_add, Value::from("ab"), Value::from("cd")),
            Ok(Value::from("abcd"))
        );
    }

    #[test]
    fn division_faults() {
        let div = int_op(TokenKind::Slash, BinaryOpKind::Division);
        assert_eq!(
            evaluate_binary(&div, Value::Int(7), Value::Int(0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate_binary(&div, Value::Int(i32::MIN), Value::Int(-1)),
            Err(overflow(i32::MIN, "/", -1))
        );
        assert_eq!(
            evaluate_binary(&div, Value::Int(-7), Value::Int(2)),
            Ok(Value::Int(-3))
        );
    }

    #[test]
    fn arithmetic_is_checked() {
        let mul = int_op(TokenKind::Star, BinaryOpKind::Multiplication);
        assert!(matches!(
            evaluate_binary(&mul, Value::Int(1 << 20), Value::Int(1 << 20)),
            Err(EvalError::Overflow { op: "*", .. })
        ));
        let neg = BoundUnaryOperator::new(TokenKind::Minus, UnaryOpKind::Negation, TypeSymbol::Int);
        assert_eq!(
            evaluate_unary(&neg, Value::Int(i32::MIN)),
            Err(EvalError::NegationOverflow { operand: i32::MIN })
        );
    }

    #[test]
    fn bitwise_and_unary() {
        let xor = int_op(TokenKind::Caret, BinaryOpKind::BitwiseXor);
        assert_eq!(
            evaluate_binary(&xor, Value::Int(0b1100), Value::Int(0b1010)),
            Ok(Value::Int(0b0110))
        );
        let complement =
            BoundUnaryOperator::new(TokenKind::Tilde, UnaryOpKind::OnesComplement, TypeSymbol::Int);
        assert_eq!(evaluate_unary(&complement, Value::Int(0)), Ok(Value::Int(-1)));
    }

    #[test]
    fn bool_operators() {
        assert!(bool_binary(BinaryOpKind::BitwiseXor, true, false));
        assert!(!bool_binary(BinaryOpKind::Equals, true, false));
        assert!(bool_binary(BinaryOpKind::LogicalOr, false, true));
    }

    #[test]
    fn conversions() {
        assert_eq!(convert(Value::Int(-12), TypeSymbol::String), Ok(Value::from("-12")));
        assert_eq!(convert(Value::Bool(true), TypeSymbol::String), Ok(Value::from("true")));
        assert_eq!(convert(Value::from(" 42 "), TypeSymbol::Int), Ok(Value::Int(42)));
        assert_eq!(convert(Value::from("False"), TypeSymbol::Bool), Ok(Value::Bool(false)));
        assert_eq!(
            convert(Value::from("4x"), TypeSymbol::Int),
            Err(invalid_conversion("4x", TypeSymbol::Int))
        );
        assert_eq!(
            convert(Value::from("yes"), TypeSymbol::Bool),
            Err(invalid_conversion("yes", TypeSymbol::Bool))
        );
    }
}
