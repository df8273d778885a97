//! Runtime values.
//!
//! Values are plain scalars. The same type doubles as the payload of
//! literal expressions, so a literal's type is always its value's type.

use std::fmt;

use crate::TypeSymbol;

/// Tagged scalar value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Int(i32),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn ty(&self) -> TypeSymbol {
        match self {
            Value::Int(_) => TypeSymbol::Int,
            Value::Bool(_) => TypeSymbol::Bool,
            Value::Str(_) => TypeSymbol::String,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

/// Displays the value the way `string(...)` converts it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_types() {
        assert_eq!(Value::Int(3).ty(), TypeSymbol::Int);
        assert_eq!(Value::Bool(false).ty(), TypeSymbol::Bool);
        assert_eq!(Value::from("x").ty(), TypeSymbol::String);
    }

    #[test]
    fn accessors_match_tag() {
        assert_eq!(Value::Int(3).as_int(), Some(3));
        assert_eq!(Value::Int(3).as_bool(), None);
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
    }

    #[test]
    fn display_is_unquoted() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }
}
