//! The closed set of types.

use std::fmt;

/// Type symbol.
///
/// The set is fixed: there are no user-defined types. `Error` is assigned
/// to expressions that failed to bind; operators and conversions consuming
/// an `Error` operand stay silent so one mistake yields one diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeSymbol {
    Int,
    Bool,
    String,
    Void,
    Error,
}

impl TypeSymbol {
    /// Source-level name.
    pub fn name(self) -> &'static str {
        match self {
            TypeSymbol::Int => "int",
            TypeSymbol::Bool => "bool",
            TypeSymbol::String => "string",
            TypeSymbol::Void => "void",
            TypeSymbol::Error => "?",
        }
    }

    /// Resolve a type name usable in source (`int`, `bool`, `string`).
    ///
    /// `void` and the error type have no spelling a user can write.
    pub fn from_name(name: &str) -> Option<TypeSymbol> {
        match name {
            "int" => Some(TypeSymbol::Int),
            "bool" => Some(TypeSymbol::Bool),
            "string" => Some(TypeSymbol::String),
            _ => None,
        }
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, TypeSymbol::Error)
    }
}

impl fmt::Display for TypeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_names_resolve() {
        assert_eq!(TypeSymbol::from_name("int"), Some(TypeSymbol::Int));
        assert_eq!(TypeSymbol::from_name("bool"), Some(TypeSymbol::Bool));
        assert_eq!(TypeSymbol::from_name("string"), Some(TypeSymbol::String));
    }

    #[test]
    fn internal_types_have_no_source_name() {
        assert_eq!(TypeSymbol::from_name("void"), None);
        assert_eq!(TypeSymbol::from_name("?"), None);
        assert_eq!(TypeSymbol::from_name("Int"), None);
    }

    #[test]
    fn display_uses_source_name() {
        assert_eq!(TypeSymbol::Error.to_string(), "?");
        assert_eq!(TypeSymbol::String.to_string(), "string");
    }
}
