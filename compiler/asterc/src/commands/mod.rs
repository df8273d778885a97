//! Command handlers for the `aster` CLI.
//!
//! Handlers write to a caller-supplied writer and return how many
//! submissions were rejected; `main` maps that to the exit code.

use std::io::Write;

use aster_diagnostic::emitter::TextEmitter;

use crate::{CommandError, Session};

mod eval;
mod explain;
mod run;

pub use eval::eval_texts;
pub use explain::explain_error;
pub use run::{run_file, run_source, split_submissions};

/// Run one submission, print what was asked for, and report whether it
/// was accepted.
pub(crate) fn submit_and_report(
    session: &mut Session,
    text: &str,
    out: &mut impl Write,
) -> Result<bool, CommandError> {
    let compilation = session.compile(text);
    if session.config().show_tree {
        write!(out, "{}", compilation.bound_tree())?;
    }
    if session.config().show_program {
        write!(out, "{}", compilation.lowered_program())?;
    }

    let result = session.run(std::rc::Rc::clone(&compilation));
    out.write_all(session.take_output().as_bytes())?;

    if !result.is_ok() {
        let mut emitter = TextEmitter::new(&mut *out);
        emitter.emit_all(&result.diagnostics, &compilation.syntax_tree().source)?;
        return Ok(false);
    }
    if let Some(value) = result.value {
        writeln!(out, "{value}")?;
    }
    Ok(true)
}
