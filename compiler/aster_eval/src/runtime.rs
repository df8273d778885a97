//! Host services available to running programs.

use aster_ir::{BuiltinFunction, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{invalid_argument, EvalError, EvalResult};
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Evaluator configuration.
#[derive(Clone)]
pub struct EvalConfig {
    /// Seed for `rnd`; `None` seeds from the OS.
    pub rng_seed: Option<u64>,
    pub print: SharedPrintHandler,
    pub input: SharedInputHandler,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            rng_seed: None,
            print: stdout_handler(),
            input: stdin_handler(),
        }
    }
}

/// Builtin implementations plus the state they carry between calls.
///
/// One runtime lives as long as a session, so `rnd` continues its
/// sequence across submissions instead of restarting it.
pub struct Runtime {
    print: SharedPrintHandler,
    input: SharedInputHandler,
    rng: StdRng,
}

impl Runtime {
    pub fn new(config: &EvalConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Runtime {
            print: config.print.clone(),
            input: config.input.clone(),
            rng,
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print
    }

    /// Run `builtin` on already-evaluated arguments.
    ///
    /// Returns `None` for `void` builtins.
    pub(crate) fn call(
        &mut self,
        builtin: BuiltinFunction,
        arguments: &[Value],
    ) -> EvalResult<Option<Value>> {
        match (builtin, arguments) {
            (BuiltinFunction::Print, [Value::Str(text)]) => {
                self.print.println(text);
                Ok(None)
            }
            (BuiltinFunction::Input, []) => self
                .input
                .read_line()
                .map(|line| Some(Value::Str(line)))
                .map_err(|err| EvalError::Input(err.to_string())),
            (BuiltinFunction::Rnd, [Value::Int(max)]) => {
                if *max <= 0 {
                    return Err(invalid_argument(
                        "rnd",
                        format!("`max` must be positive, got {max}"),
                    ));
                }
                Ok(Some(Value::Int(self.rng.gen_range(0..*max))))
            }
            (builtin, arguments) => {
                unreachable!("{builtin:?} called with {} ill-typed arguments", arguments.len())
            }
        }
    }
}
