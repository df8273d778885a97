//! Aster Eval - runs lowered programs.
//!
//! ```text
//! Source → Lex → Parse → Bind → Lower → **Evaluate**
//! ```
//!
//! # Architecture
//!
//! - [`evaluate`]: program-counter loop over a flat statement list, with a
//!   label → index table built in one pre-pass
//! - `operators`: checked `int` arithmetic and type-directed dispatch
//! - [`Runtime`]: the builtins (`print`, `input`, `rnd`) and their handlers
//! - [`EvalError`]: runtime faults, convertible to E6xxx diagnostics
//!
//! State persists across submissions through the caller-owned
//! [`VariableStore`].

pub mod errors;
mod evaluator;
mod input_handler;
mod operators;
mod print_handler;
mod runtime;

pub use errors::{EvalError, EvalResult};
pub use evaluator::{evaluate, VariableStore};
pub use input_handler::{stdin_handler, InputHandler, SharedInputHandler};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandler,
    SharedPrintHandler,
};
pub use runtime::{EvalConfig, Runtime};
