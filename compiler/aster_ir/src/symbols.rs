//! Variable, parameter and function symbols.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::TypeSymbol;

#[derive(Debug)]
struct VariableData {
    name: String,
    read_only: bool,
    ty: TypeSymbol,
}

/// A declared variable.
///
/// Compared and hashed by identity: two declarations of `x` in different
/// scopes are different symbols, which is what lets the variable store key
/// on symbols while shadowing stays legal. Cloning shares the identity.
#[derive(Clone)]
pub struct VariableSymbol(Rc<VariableData>);

impl VariableSymbol {
    pub fn new(name: impl Into<String>, read_only: bool, ty: TypeSymbol) -> Self {
        VariableSymbol(Rc::new(VariableData {
            name: name.into(),
            read_only,
            ty,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn is_read_only(&self) -> bool {
        self.0.read_only
    }

    pub fn ty(&self) -> TypeSymbol {
        self.0.ty
    }
}

impl PartialEq for VariableSymbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for VariableSymbol {}

impl Hash for VariableSymbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for VariableSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = if self.is_read_only() { "let" } else { "var" };
        write!(f, "{keyword} {}: {}", self.name(), self.ty())
    }
}

/// A function parameter: a name and the type arguments must have.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParameterSymbol {
    pub name: String,
    pub ty: TypeSymbol,
}

impl ParameterSymbol {
    pub fn new(name: impl Into<String>, ty: TypeSymbol) -> Self {
        ParameterSymbol {
            name: name.into(),
            ty,
        }
    }
}

/// Host-provided function bodies.
///
/// The language has no function declarations, so every callable symbol is
/// one of these; the tag is what the evaluator dispatches on.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuiltinFunction {
    Print,
    Input,
    Rnd,
}

/// A callable: name, ordered parameters and return type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSymbol {
    pub name: String,
    pub parameters: Vec<ParameterSymbol>,
    pub ty: TypeSymbol,
    pub builtin: BuiltinFunction,
}

impl FunctionSymbol {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<ParameterSymbol>,
        ty: TypeSymbol,
        builtin: BuiltinFunction,
    ) -> Self {
        FunctionSymbol {
            name: name.into(),
            parameters,
            ty,
            builtin,
        }
    }
}

/// Anything a scope can hold under a name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    Variable(VariableSymbol),
    Function(FunctionSymbol),
}

impl Symbol {
    pub fn name(&self) -> &str {
        match self {
            Symbol::Variable(variable) => variable.name(),
            Symbol::Function(function) => &function.name,
        }
    }
}
