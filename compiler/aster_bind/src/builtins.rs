//! Host-provided functions visible to every submission.

use aster_ir::{BuiltinFunction, FunctionSymbol, ParameterSymbol, TypeSymbol};

/// `print(text: string): void`, `input(): string` and `rnd(max: int): int`.
pub fn builtin_functions() -> Vec<FunctionSymbol> {
    vec![
        FunctionSymbol::new(
            "print",
            vec![ParameterSymbol::new("text", TypeSymbol::String)],
            TypeSymbol::Void,
            BuiltinFunction::Print,
        ),
        FunctionSymbol::new("input", Vec::new(), TypeSymbol::String, BuiltinFunction::Input),
        FunctionSymbol::new(
            "rnd",
            vec![ParameterSymbol::new("max", TypeSymbol::Int)],
            TypeSymbol::Int,
            BuiltinFunction::Rnd,
        ),
    ]
}
