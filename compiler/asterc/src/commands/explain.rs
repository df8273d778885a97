//! `aster explain <code>`: one-line documentation for an error code.

use std::io::Write;

use aster_diagnostic::ErrorCode;

use crate::CommandError;

pub fn explain_error(code: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let Some(code) = ErrorCode::parse(code) else {
        return Err(CommandError::UnknownErrorCode(code.to_owned()));
    };
    writeln!(out, "{code}: {}", code.description())?;
    Ok(())
}
