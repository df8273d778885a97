//! Session configuration and the flags that set it.

use std::sync::Arc;

use aster_eval::{
    buffer_handler, silent_handler, stdin_handler, stdout_handler, EvalConfig, InputHandler,
};

use crate::CommandError;

/// Environment variable consulted for the seed when `--seed` is absent.
pub const SEED_VAR: &str = "ASTER_SEED";

/// Destination of `print` output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PrintTarget {
    #[default]
    Stdout,
    /// Captured; read back with `Session::take_output`.
    Buffer,
    Silent,
}

/// Source of `input` lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    Lines(Vec<String>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub rng_seed: Option<u64>,
    /// Print each submission's bound tree before running it.
    pub show_tree: bool,
    /// Print each submission's lowered program before running it.
    pub show_program: bool,
    pub print: PrintTarget,
    pub input: InputSource,
}

impl SessionConfig {
    /// Apply one command-line flag.
    ///
    /// Returns `Ok(false)` for arguments that are not flags, so callers can
    /// treat them as operands.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, CommandError> {
        if let Some(seed) = arg.strip_prefix("--seed=") {
            self.rng_seed = Some(parse_seed(seed)?);
        } else if arg == "--show-tree" {
            self.show_tree = true;
        } else if arg == "--show-program" {
            self.show_program = true;
        } else if arg.starts_with("--") {
            return Err(CommandError::UnknownFlag(arg.to_owned()));
        } else {
            return Ok(false);
        }
        Ok(true)
    }

    /// Fill the seed from [`SEED_VAR`] unless a flag already set it.
    pub fn seed_from_env(&mut self) -> Result<(), CommandError> {
        if self.rng_seed.is_none() {
            if let Ok(seed) = std::env::var(SEED_VAR) {
                self.rng_seed = Some(parse_seed(&seed)?);
            }
        }
        Ok(())
    }

    pub(crate) fn eval_config(&self) -> EvalConfig {
        EvalConfig {
            rng_seed: self.rng_seed,
            print: match self.print {
                PrintTarget::Stdout => stdout_handler(),
                PrintTarget::Buffer => buffer_handler(),
                PrintTarget::Silent => silent_handler(),
            },
            input: match &self.input {
                InputSource::Stdin => stdin_handler(),
                InputSource::Lines(lines) => Arc::new(InputHandler::scripted(lines.iter().cloned())),
            },
        }
    }
}

fn parse_seed(text: &str) -> Result<u64, CommandError> {
    text.trim()
        .parse()
        .map_err(|_| CommandError::InvalidSeed(text.to_owned()))
}
