//! `aster eval <text>...`: each argument is one submission.

use std::io::Write;

use crate::commands::submit_and_report;
use crate::{CommandError, Session, SessionConfig};

pub fn eval_texts(
    texts: &[String],
    config: SessionConfig,
    out: &mut impl Write,
) -> Result<usize, CommandError> {
    let mut session = Session::new(config);
    let mut rejected = 0;
    for text in texts {
        if !submit_and_report(&mut session, text, out)? {
            rejected += 1;
        }
    }
    Ok(rejected)
}
