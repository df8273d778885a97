//! Aster driver: chains submissions into a session and runs them.
//!
//! ```text
//! Source → Lex → Parse → Bind → Lower → Evaluate
//! ```
//!
//! [`Compilation`] ties one syntax tree to the compilations before it and
//! binds lazily; [`Session`] owns the latest accepted compilation plus the
//! variable store, which together make declarations and values persist
//! across submissions. The `aster` binary in `main.rs` is a thin layer
//! over [`commands`].

pub mod commands;
mod compilation;
mod config;
mod error;
mod session;
mod tracing_setup;

pub use compilation::{Compilation, EvaluationResult};
pub use config::{InputSource, PrintTarget, SessionConfig, SEED_VAR};
pub use error::CommandError;
pub use session::Session;
pub use tracing_setup::init_tracing;
