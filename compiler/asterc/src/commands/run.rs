//! `aster run <file>`: each blank-line separated paragraph is one
//! submission of a single session.

use std::io::Write;
use std::path::Path;

use crate::commands::submit_and_report;
use crate::{CommandError, Session, SessionConfig};

pub fn run_file(
    path: &Path,
    config: SessionConfig,
    out: &mut impl Write,
) -> Result<usize, CommandError> {
    let text = std::fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_owned(),
        source,
    })?;
    run_source(&text, config, out)
}

/// Run every submission in `text`; returns the number rejected.
pub fn run_source(
    text: &str,
    config: SessionConfig,
    out: &mut impl Write,
) -> Result<usize, CommandError> {
    let mut session = Session::new(config);
    let mut rejected = 0;
    for submission in split_submissions(text) {
        if !submit_and_report(&mut session, &submission, out)? {
            rejected += 1;
        }
    }
    Ok(rejected)
}

/// Split source into submissions at blank lines.
pub fn split_submissions(text: &str) -> Vec<String> {
    let mut submissions = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                submissions.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        submissions.push(current);
    }
    submissions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrintTarget;
    use pretty_assertions::assert_eq;

    #[test]
    fn paragraphs_become_submissions() {
        let text = "var x = 1\n\n\n{\n  x = x + 1\n  x\n}\n  \nx\n";
        assert_eq!(
            split_submissions(text),
            vec!["var x = 1", "{\n  x = x + 1\n  x\n}", "x"]
        );
    }

    #[test]
    fn runs_a_session_and_prints_values() {
        let config = SessionConfig {
            print: PrintTarget::Buffer,
            ..SessionConfig::default()
        };
        let mut out = Vec::new();
        let rejected = run_source("var n = 3\n\nprint(string(n * 2))\n\nn", config, &mut out);
        assert!(matches!(rejected, Ok(0)));
        assert_eq!(String::from_utf8_lossy(&out), "3\n6\n3\n");
    }

    #[test]
    fn diagnostics_are_rendered_and_counted() {
        let mut out = Vec::new();
        let rejected = run_source("1 + true\n\n2", SessionConfig::default(), &mut out);
        assert!(matches!(rejected, Ok(1)));
        let text = String::from_utf8_lossy(&out);
        assert!(text.starts_with("error[E2003]: binary operator `+` is not defined"));
        assert!(text.ends_with("\n2\n"));
    }
}
