use aster_diagnostic::ErrorCode;
use aster_ir::{Span, Value};
use pretty_assertions::assert_eq;

use crate::common::{codes, eval, session};

#[test]
fn undefined_binary_operator_reports_once() {
    assert_eq!(codes(&eval("1 + true")), vec![ErrorCode::E2003]);
    // The error-typed result stays silent in the enclosing expressions.
    assert_eq!(codes(&eval("(1 + true) * 2 == 3")), vec![ErrorCode::E2003]);
    assert_eq!(codes(&eval("-(1 + true)")), vec![ErrorCode::E2003]);
    assert_eq!(codes(&eval("{ var x = 1 + true x = x + 1 }")), vec![ErrorCode::E2003]);
}

#[test]
fn undefined_binary_operator_span_is_the_operator() {
    let result = eval("1 + true");
    assert_eq!(result.diagnostics[0].span(), Span::new(2, 3));
    assert_eq!(
        result.diagnostics[0].message,
        "binary operator `+` is not defined for types `int` and `bool`"
    );
}

#[test]
fn undefined_unary_operator() {
    assert_eq!(codes(&eval("-true")), vec![ErrorCode::E2002]);
    assert_eq!(codes(&eval("!1")), vec![ErrorCode::E2002]);
}

#[test]
fn duplicate_declaration_reports_once_and_keeps_going() {
    assert_eq!(codes(&eval("{ var x = 1 var x = 2 }")), vec![ErrorCode::E2005]);
    assert_eq!(
        codes(&eval("{ var x = 1 var x = 2 y }")),
        vec![ErrorCode::E2005, ErrorCode::E2004]
    );
}

#[test]
fn independent_errors_are_all_reported() {
    assert_eq!(
        codes(&eval("{ a = 1 !5 b }")),
        vec![ErrorCode::E2004, ErrorCode::E2002, ErrorCode::E2004]
    );
}

#[test]
fn let_variables_cannot_be_assigned() {
    let mut session = session();
    assert!(session.submit("let k = 1").is_ok());

    assert_eq!(codes(&session.submit("k = 2")), vec![ErrorCode::E2006]);
    assert_eq!(
        codes(&session.submit("k = \"s\"")),
        vec![ErrorCode::E2006, ErrorCode::E2001]
    );
    assert_eq!(session.submit("k").value, Some(Value::Int(1)));
}

#[test]
fn for_variable_is_read_only() {
    assert_eq!(
        codes(&eval("for i = 1 to 3 i = 10")),
        vec![ErrorCode::E2006]
    );
}

#[test]
fn type_mismatches() {
    assert_eq!(codes(&eval("if 1 2")), vec![ErrorCode::E2001]);
    assert_eq!(codes(&eval("while \"x\" 1")), vec![ErrorCode::E2001]);
    assert_eq!(codes(&eval("for i = true to 3 1")), vec![ErrorCode::E2001]);
    assert_eq!(codes(&eval("{ var n = 1 n = \"one\" }")), vec![ErrorCode::E2001]);
    assert_eq!(codes(&eval("int(true)")), vec![ErrorCode::E2001]);
}

#[test]
fn calls() {
    assert_eq!(codes(&eval("foo(1)")), vec![ErrorCode::E2007]);
    assert_eq!(codes(&eval("rnd(1, 2)")), vec![ErrorCode::E2008]);
    assert_eq!(codes(&eval("rnd(\"x\")")), vec![ErrorCode::E2009]);
    assert_eq!(codes(&eval("var v = print(\"x\")")), vec![ErrorCode::E2010]);
    assert_eq!(codes(&eval("1 + print(\"x\")")), vec![ErrorCode::E2010]);
}

#[test]
fn syntax_diagnostics_come_first() {
    assert_eq!(
        codes(&eval("1 + true )")),
        vec![ErrorCode::E1001, ErrorCode::E2003]
    );
    assert_eq!(codes(&eval("@1")), vec![ErrorCode::E0002]);
    assert_eq!(codes(&eval("\"open")), vec![ErrorCode::E0001]);
    assert_eq!(codes(&eval("99999999999")), vec![ErrorCode::E0003]);
}

#[test]
fn missing_operand_reports_only_the_syntax_error() {
    assert_eq!(codes(&eval("1 +")), vec![ErrorCode::E1001]);
}

#[test]
fn nothing_runs_when_diagnostics_exist() {
    let mut session = session();
    let result = session.submit("{ print(\"side effect\") 1 + true }");
    assert_eq!(result.value, None);
    assert_eq!(session.take_output(), "");
}
