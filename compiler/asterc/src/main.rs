//! Aster command-line interface.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use asterc::commands::{eval_texts, explain_error, run_file};
use asterc::{init_tracing, CommandError, SessionConfig};

const USAGE: &str = "\
Usage: aster <command> [options]

Commands:
  run <file>         Run a file; blank lines separate submissions
  eval <text>...     Run each argument as one submission
  explain <code>     Describe an error code (e.g. E2004)

Options:
  --seed=<n>         Seed for `rnd` (default: $ASTER_SEED, else random)
  --show-tree        Print each submission's bound tree
  --show-program     Print each submission's lowered program";

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match dispatch(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CommandError::Usage(_) | CommandError::UnknownFlag(_)) {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of rejected submissions.
fn dispatch(args: &[String]) -> Result<usize, CommandError> {
    let Some((command, rest)) = args.split_first() else {
        println!("{USAGE}");
        return Ok(0);
    };

    let mut config = SessionConfig::default();
    let mut operands = Vec::new();
    for arg in rest {
        if !config.apply_flag(arg)? {
            operands.push(arg.clone());
        }
    }
    config.seed_from_env()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let rejected = match command.as_str() {
        "run" => {
            let [path] = operands.as_slice() else {
                return Err(CommandError::Usage("`run` takes exactly one file"));
            };
            run_file(Path::new(path), config, &mut out)?
        }
        "eval" => {
            if operands.is_empty() {
                return Err(CommandError::Usage("`eval` needs at least one submission"));
            }
            eval_texts(&operands, config, &mut out)?
        }
        "explain" => {
            let [code] = operands.as_slice() else {
                return Err(CommandError::Usage("`explain` takes exactly one error code"));
            };
            explain_error(code, &mut out)?;
            0
        }
        "help" | "--help" | "-h" => {
            writeln!(out, "{USAGE}")?;
            0
        }
        _ => return Err(CommandError::Usage("unknown command")),
    };
    out.flush()?;
    Ok(rejected)
}
