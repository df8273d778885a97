//! Name resolution and type checking.
//!
//! [`bind_global_scope`] binds one submission's syntax tree against the
//! chain of earlier submissions and returns the next [`GlobalScope`]
//! snapshot: the typed statement, the variables it declared at top level
//! and every diagnostic so far.

mod binder;
mod builtins;
mod conversion;
mod operators;
mod scope;

pub use binder::{bind_global_scope, GlobalScope};
pub use builtins::builtin_functions;
pub use conversion::Conversion;
pub use operators::{bind_binary, bind_unary};
pub use scope::{ScopeArena, ScopeId};
