//! Runtime faults.
//!
//! The binder rules out type errors, so everything here depends on values:
//! a zero divisor, an overflowing result, a string that does not parse.
//! Faults stop the submission; the host turns them into diagnostics with
//! [`EvalError::to_diagnostic`].

use aster_diagnostic::{Diagnostic, ErrorCode};
use aster_ir::{Span, TypeSymbol};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in `{left} {op} {right}`")]
    Overflow {
        left: i32,
        op: &'static str,
        right: i32,
    },

    #[error("integer overflow negating `{operand}`")]
    NegationOverflow { operand: i32 },

    #[error("cannot convert \"{text}\" to `{ty}`")]
    InvalidConversion { text: String, ty: TypeSymbol },

    #[error("`{function}` received an invalid argument: {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },

    #[error("failed to read input: {0}")]
    Input(String),

    #[error("`{name}` was read before its declaration executed")]
    Unassigned { name: String },
}

pub type EvalResult<T> = Result<T, EvalError>;

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::DivisionByZero => ErrorCode::E6001,
            EvalError::Overflow { .. } | EvalError::NegationOverflow { .. } => ErrorCode::E6002,
            EvalError::InvalidConversion { .. } => ErrorCode::E6003,
            EvalError::InvalidArgument { .. } => ErrorCode::E6004,
            EvalError::Input(_) => ErrorCode::E6005,
            EvalError::Unassigned { .. } => ErrorCode::E6006,
        }
    }

    /// Report this fault against `span`, the submission that raised it.
    #[cold]
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(span, "raised while evaluating this")
    }
}

// Constructors

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn overflow(left: i32, op: &'static str, right: i32) -> EvalError {
    EvalError::Overflow { left, op, right }
}

#[cold]
pub fn invalid_conversion(text: &str, ty: TypeSymbol) -> EvalError {
    EvalError::InvalidConversion {
        text: text.to_owned(),
        ty,
    }
}

#[cold]
pub fn invalid_argument(function: &'static str, reason: impl Into<String>) -> EvalError {
    EvalError::InvalidArgument {
        function,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        assert_eq!(division_by_zero().to_string(), "division by zero");
        assert_eq!(
            overflow(i32::MAX, "+", 1).to_string(),
            "integer overflow in `2147483647 + 1`"
        );
        assert_eq!(
            invalid_conversion("abc", TypeSymbol::Int).to_string(),
            "cannot convert \"abc\" to `int`"
        );
    }

    #[test]
    fn diagnostic_carries_code_and_span() {
        let diagnostic = division_by_zero().to_diagnostic(Span::new(0, 5));
        assert_eq!(diagnostic.code, ErrorCode::E6001);
        assert_eq!(diagnostic.message, "division by zero");
        assert_eq!(diagnostic.span(), Span::new(0, 5));
    }

    #[test]
    fn every_fault_maps_to_a_runtime_code() {
        let faults = [
            division_by_zero(),
            overflow(1, "*", 2),
            EvalError::NegationOverflow { operand: i32::MIN },
            invalid_conversion("x", TypeSymbol::Bool),
            invalid_argument("rnd", "max must be positive"),
            EvalError::Input("closed".into()),
            EvalError::Unassigned { name: "z".into() },
        ];
        for fault in faults {
            assert!(fault.code().is_runtime_error(), "{fault}");
        }
    }
}
