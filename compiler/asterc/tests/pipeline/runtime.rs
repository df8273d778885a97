use aster_diagnostic::ErrorCode;
use aster_ir::Span;
use pretty_assertions::assert_eq;

use crate::common::{codes, eval, session};

#[test]
fn division_by_zero() {
    let result = eval("1 / 0");
    assert_eq!(codes(&result), vec![ErrorCode::E6001]);
    assert_eq!(result.value, None);
    assert_eq!(result.diagnostics[0].span(), Span::new(0, 5));
}

#[test]
fn overflow_is_reported() {
    assert_eq!(codes(&eval("2147483647 + 1")), vec![ErrorCode::E6002]);
    assert_eq!(codes(&eval("{ var m = 0 - 2147483647 - 1 m / -1 }")), vec![ErrorCode::E6002]);
    assert_eq!(codes(&eval("{ var m = 0 - 2147483647 - 1 var n = -m }")), vec![ErrorCode::E6002]);
}

#[test]
fn for_loop_ending_at_int_max_overflows() {
    assert_eq!(
        codes(&eval("for i = 2147483646 to 2147483647 { }")),
        vec![ErrorCode::E6002]
    );
}

#[test]
fn failed_conversion() {
    let result = eval("int(\"abc\")");
    assert_eq!(codes(&result), vec![ErrorCode::E6003]);
    assert_eq!(result.diagnostics[0].message, "cannot convert \"abc\" to `int`");
    assert_eq!(codes(&eval("bool(\"yes\")")), vec![ErrorCode::E6003]);
}

#[test]
fn rnd_rejects_non_positive_max() {
    assert_eq!(codes(&eval("rnd(0)")), vec![ErrorCode::E6004]);
    assert_eq!(codes(&eval("rnd(-3)")), vec![ErrorCode::E6004]);
}

#[test]
fn writes_before_a_fault_are_kept() {
    let mut session = session();
    assert!(session.submit("var total = 0").is_ok());
    let result = session.submit("{ total = 5 total = total / 0 }");
    assert_eq!(codes(&result), vec![ErrorCode::E6001]);
    assert_eq!(session.submit("total").value, Some(aster_ir::Value::Int(5)));
}
