use aster_ir::Value;
use asterc::{InputSource, PrintTarget, Session, SessionConfig};
use pretty_assertions::assert_eq;

use crate::common::{eval, value};

#[test]
fn arithmetic() {
    assert_eq!(value("1 + 3"), Value::Int(4));
    assert_eq!(value("2 + 3 * 4"), Value::Int(14));
    assert_eq!(value("(2 + 3) * 4"), Value::Int(20));
    assert_eq!(value("-2 * 3"), Value::Int(-6));
    assert_eq!(value("10 - 4 - 3"), Value::Int(3));
    assert_eq!(value("7 / 2"), Value::Int(3));
    assert_eq!(value("6 & 3 | 8 ^ 1"), Value::Int(11));
    assert_eq!(value("~5"), Value::Int(-6));
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(value("{ var a = 0 (a = 5) * a }"), Value::Int(25));
    assert_eq!(value("{ var a = 0 var b = 0 a = b = 3 a + b }"), Value::Int(6));
}

#[test]
fn for_loop_sum() {
    assert_eq!(
        value("{ var sum = 0 for i = 1 to 5 { sum = sum + i } sum }"),
        Value::Int(15)
    );
}

#[test]
fn for_bounds_are_inclusive() {
    assert_eq!(value("{ var c = 0 for i = 1 to 5 c = c + 1 c }"), Value::Int(5));
    assert_eq!(value("{ var c = 0 for i = 3 to 3 c = c + 1 c }"), Value::Int(1));
    assert_eq!(value("{ var c = 0 for i = 5 to 1 c = c + 1 c }"), Value::Int(0));
}

#[test]
fn for_upper_bound_is_evaluated_once() {
    assert_eq!(
        value("{ var n = 3 var c = 0 for i = 1 to n { n = n + 1 c = c + 1 } c }"),
        Value::Int(3)
    );
}

#[test]
fn nested_while_loops() {
    let text = "{
        var n = 0
        var i = 0
        while i < 4 {
            var j = 0
            while j < 3 {
                n = n + 1
                j = j + 1
            }
            i = i + 1
        }
        n
    }";
    assert_eq!(value(text), Value::Int(12));
}

#[test]
fn if_else_chains() {
    let classify = |n: i32| {
        value(&format!(
            "{{ var n = {n} var r = \"\" if n < 0 r = \"neg\" else if n == 0 r = \"zero\" else r = \"pos\" r }}"
        ))
    };
    assert_eq!(classify(-3), Value::from("neg"));
    assert_eq!(classify(0), Value::from("zero"));
    assert_eq!(classify(9), Value::from("pos"));
}

#[test]
fn booleans_and_comparisons() {
    assert_eq!(value("1 < 2 && 2 <= 2"), Value::Bool(true));
    assert_eq!(value("!(3 >= 4) || false"), Value::Bool(true));
    assert_eq!(value("true ^ true"), Value::Bool(false));
    assert_eq!(value("true != false"), Value::Bool(true));
}

#[test]
fn logical_operators_short_circuit() {
    let result = eval("false && 1 / 0 == 0");
    assert!(result.is_ok());
    assert_eq!(result.value, Some(Value::Bool(false)));
    assert_eq!(value("true || 1 / 0 == 0"), Value::Bool(true));
}

#[test]
fn strings() {
    assert_eq!(value("\"a\" + \"b\" == \"ab\""), Value::Bool(true));
    assert_eq!(value("string(12) + \"!\""), Value::from("12!"));
    assert_eq!(value("\"say \"\"hi\"\"\""), Value::from("say \"hi\""));
}

#[test]
fn conversions() {
    assert_eq!(value("int(\"41\") + 1"), Value::Int(42));
    assert_eq!(value("bool(\"true\") && true"), Value::Bool(true));
    assert_eq!(value("string(1 < 2)"), Value::from("true"));
    assert_eq!(value("int(7)"), Value::Int(7));
}

#[test]
fn print_produces_no_value() {
    let mut session = Session::new(SessionConfig {
        print: PrintTarget::Buffer,
        ..SessionConfig::default()
    });
    let result = session.submit("print(\"a\" + \"b\")");
    assert!(result.is_ok());
    assert_eq!(result.value, None);
    assert_eq!(session.take_output(), "ab\n");

    // The loop's own increment is the last statement to run.
    let result = session.submit("for i = 1 to 3 print(string(i))");
    assert_eq!(result.value, Some(Value::Int(4)));
    assert_eq!(session.take_output(), "1\n2\n3\n");
}

#[test]
fn input_reads_scripted_lines() {
    let mut session = Session::new(SessionConfig {
        input: InputSource::Lines(vec!["5".into(), "abc".into()]),
        ..SessionConfig::default()
    });
    assert_eq!(session.submit("int(input()) * 2").value, Some(Value::Int(10)));
    assert_eq!(session.submit("input()").value, Some(Value::from("abc")));
}

#[test]
fn rnd_is_in_range() {
    assert_eq!(
        value("{ var ok = true for i = 1 to 50 { var r = rnd(6) ok = ok && r >= 0 && r < 6 } ok }"),
        Value::Bool(true)
    );
}
