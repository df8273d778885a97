//! Aster IR - shared data structures for the Aster pipeline.
//!
//! This crate contains the types every phase agrees on:
//! - Spans and source text for locating diagnostics
//! - Tokens and the untyped syntax tree produced by the parser
//! - The closed type set and the variable/function symbols
//! - The bound tree produced by the binder and rewritten by lowering
//! - Runtime values, which also serve as literal constants
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lex → Parse → **Bind** → **Lower** → Evaluate
//! ```
//!
//! Every node kind is an explicit enum variant; phases match exhaustively
//! instead of discovering children at run time.

pub mod bound;
mod source_text;
mod span;
mod symbols;
pub mod syntax;
mod token;
mod types;
mod value;

pub use bound::{
    BinaryOpKind, BoundBinaryOperator, BoundExpression, BoundStatement, BoundUnaryOperator, Label,
    UnaryOpKind,
};
pub use source_text::SourceText;
pub use span::Span;
pub use symbols::{BuiltinFunction, FunctionSymbol, ParameterSymbol, Symbol, VariableSymbol};
pub use token::{Token, TokenKind};
pub use types::TypeSymbol;
pub use value::Value;
