//! Error codes for every diagnostic the pipeline can report.
//!
//! The first digit names the phase that reported it. Codes are stable, so
//! tests and `aster explain` can refer to them.

use std::fmt;

/// Diagnostic error codes.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Binding (name and type) errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Number literal does not fit in `int`
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,

    // Binding Errors (E2xxx)
    /// Cannot convert between types
    E2001,
    /// Unary operator not defined for operand type
    E2002,
    /// Binary operator not defined for operand types
    E2003,
    /// Undefined variable name
    E2004,
    /// Name already declared in this scope
    E2005,
    /// Assignment to a read-only variable
    E2006,
    /// Undefined function
    E2007,
    /// Wrong number of call arguments
    E2008,
    /// Call argument has the wrong type
    E2009,
    /// Expression has no value
    E2010,

    // Runtime Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Integer overflow
    E6002,
    /// Conversion failed at runtime
    E6003,
    /// Builtin called with an invalid argument
    E6004,
    /// Reading input failed
    E6005,
    /// Variable read before its declaration ran
    E6006,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
    ];

    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
        }
    }

    /// One-line explanation, shown by `aster explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "a string literal is missing its closing quote",
            ErrorCode::E0002 => "a character that starts no token appeared in the source",
            ErrorCode::E0003 => "a number literal is outside the range of `int`",
            ErrorCode::E1001 => "the parser found a token it did not expect",
            ErrorCode::E2001 => "a value of one type was used where another type is required",
            ErrorCode::E2002 => "the unary operator is not defined for the operand type",
            ErrorCode::E2003 => "the binary operator is not defined for the operand types",
            ErrorCode::E2004 => "no variable with this name is visible here",
            ErrorCode::E2005 => "the name is already declared in the same scope",
            ErrorCode::E2006 => "variables declared with `let` cannot be assigned",
            ErrorCode::E2007 => "no function with this name is visible here",
            ErrorCode::E2008 => "the call passes a different number of arguments than declared",
            ErrorCode::E2009 => "a call argument does not have the parameter's type",
            ErrorCode::E2010 => "a `void` call was used where a value is required",
            ErrorCode::E6001 => "the right operand of `/` was zero",
            ErrorCode::E6002 => "an `int` operation produced a result outside its range",
            ErrorCode::E6003 => "a string could not be converted to the requested type",
            ErrorCode::E6004 => "a builtin function rejected its argument",
            ErrorCode::E6005 => "reading a line of input failed",
            ErrorCode::E6006 => "a variable was read but its declaration never executed",
        }
    }

    /// Look a code up by its `E####` spelling.
    pub fn parse(text: &str) -> Option<ErrorCode> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(text))
    }

    /// Check if this is a lexer error (E0xxx range).
    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a binding error (E2xxx range).
    pub fn is_binding_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    /// Check if this is a runtime error (E6xxx range).
    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_unique() {
        let names: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn parse_round_trips_every_code() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::parse(code.as_str()), Some(*code));
        }
        assert_eq!(ErrorCode::parse("e2004"), Some(ErrorCode::E2004));
        assert_eq!(ErrorCode::parse("E9999"), None);
    }

    #[test]
    fn phase_ranges() {
        assert!(ErrorCode::E0002.is_lexer_error());
        assert!(ErrorCode::E1001.is_parser_error());
        assert!(ErrorCode::E2010.is_binding_error());
        assert!(ErrorCode::E6001.is_runtime_error());
        assert!(!ErrorCode::E6001.is_binding_error());
    }
}
