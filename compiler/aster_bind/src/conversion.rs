//! Which type conversions exist.
//!
//! Conversions are only ever explicit (`string(42)`, `int("7")`); the binder
//! never inserts one on its own.

use aster_ir::TypeSymbol;

/// Classification of a conversion from one type to another.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Conversion {
    /// No conversion exists.
    None,
    /// Source and target are the same type.
    Identity,
    /// A real conversion, performed at run time. From `string` it can fail.
    Explicit,
}

impl Conversion {
    pub fn classify(from: TypeSymbol, to: TypeSymbol) -> Conversion {
        use TypeSymbol::{Bool, Int, String};
        match (from, to) {
            (TypeSymbol::Error, _) | (_, TypeSymbol::Error) => Conversion::None,
            _ if from == to => Conversion::Identity,
            (Int | Bool, String) | (String, Int | Bool) => Conversion::Explicit,
            _ => Conversion::None,
        }
    }

    pub fn exists(self) -> bool {
        !matches!(self, Conversion::None)
    }

    pub fn is_identity(self) -> bool {
        matches!(self, Conversion::Identity)
    }
}
