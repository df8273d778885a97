//! Shared helpers for pipeline tests.

use aster_diagnostic::ErrorCode;
use aster_ir::Value;
use asterc::{EvaluationResult, PrintTarget, Session, SessionConfig};

pub fn session() -> Session {
    Session::new(SessionConfig {
        rng_seed: Some(7),
        print: PrintTarget::Buffer,
        ..SessionConfig::default()
    })
}

/// Evaluate `text` as the only submission of a fresh session.
pub fn eval(text: &str) -> EvaluationResult {
    session().submit(text)
}

/// Evaluate `text`, requiring success and a value.
pub fn value(text: &str) -> Value {
    let result = eval(text);
    assert!(result.is_ok(), "`{text}` reported {:#?}", result.diagnostics);
    result.value.expect("submission produced no value")
}

pub fn codes(result: &EvaluationResult) -> Vec<ErrorCode> {
    result.diagnostics.iter().map(|d| d.code).collect()
}
