use super::*;
use crate::print_handler::buffer_handler;
use crate::runtime::EvalConfig;
use aster_ir::{BoundBinaryOperator, BuiltinFunction, ParameterSymbol, TokenKind, TypeSymbol};
use pretty_assertions::assert_eq;

fn int(n: i32) -> BoundExpression {
    BoundExpression::Literal(Value::Int(n))
}

fn var(variable: &VariableSymbol) -> BoundExpression {
    BoundExpression::Variable(variable.clone())
}

const ADD: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::Plus,
    BinaryOpKind::Addition,
    TypeSymbol::Int,
    TypeSymbol::Int,
);

const DIV: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::Slash,
    BinaryOpKind::Division,
    TypeSymbol::Int,
    TypeSymbol::Int,
);

const LESS: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::Lt,
    BinaryOpKind::Less,
    TypeSymbol::Int,
    TypeSymbol::Bool,
);

const AND: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::AmpAmp,
    BinaryOpKind::LogicalAnd,
    TypeSymbol::Bool,
    TypeSymbol::Bool,
);

const EQUALS: BoundBinaryOperator = BoundBinaryOperator::new(
    TokenKind::EqEq,
    BinaryOpKind::Equals,
    TypeSymbol::Int,
    TypeSymbol::Bool,
);

struct Run {
    result: EvalResult<Option<Value>>,
    store: VariableStore,
    output: String,
}

fn run(program: &[BoundStatement]) -> Run {
    let config = EvalConfig {
        print: buffer_handler(),
        rng_seed: Some(0),
        ..EvalConfig::default()
    };
    let mut runtime = Runtime::new(&config);
    let mut store = VariableStore::default();
    let result = evaluate(program, &mut store, &mut runtime);
    Run {
        result,
        store,
        output: config.print.output(),
    }
}

#[test]
fn empty_program_has_no_value() {
    assert_eq!(run(&[]).result, Ok(None));
}

#[test]
fn declaration_stores_and_produces_value() {
    let x = VariableSymbol::new("x", false, TypeSymbol::Int);
    let run = run(&[BoundStatement::declaration(
        x.clone(),
        BoundExpression::binary(int(2), ADD, int(3)),
    )]);
    assert_eq!(run.result, Ok(Some(Value::Int(5))));
    assert_eq!(run.store.get(&x), Some(&Value::Int(5)));
}

#[test]
fn backward_jump_loops_until_condition_fails() {
    let i = VariableSymbol::new("i", false, TypeSymbol::Int);
    let body = Label::new(1);
    let check = Label::new(2);
    let end = Label::new(3);
    let program = [
        BoundStatement::declaration(i.clone(), int(0)),
        BoundStatement::Goto(check),
        BoundStatement::Label(body),
        BoundStatement::Expression(BoundExpression::assignment(
            i.clone(),
            BoundExpression::binary(var(&i), ADD, int(1)),
        )),
        BoundStatement::Label(check),
        BoundStatement::conditional_goto(body, BoundExpression::binary(var(&i), LESS, int(3)), true),
        BoundStatement::Label(end),
    ];
    let run = run(&program);
    assert_eq!(run.result, Ok(Some(Value::Int(3))));
    assert_eq!(run.store.get(&i), Some(&Value::Int(3)));
}

#[test]
fn jump_if_false_falls_through_on_true() {
    let x = VariableSymbol::new("x", false, TypeSymbol::Int);
    let skip = Label::new(1);
    let program = |condition: bool| {
        vec![
            BoundStatement::declaration(x.clone(), int(0)),
            BoundStatement::conditional_goto(
                skip,
                BoundExpression::Literal(Value::Bool(condition)),
                false,
            ),
            BoundStatement::Expression(BoundExpression::assignment(x.clone(), int(1))),
            BoundStatement::Label(skip),
        ]
    };
    assert_eq!(run(&program(true)).store.get(&x), Some(&Value::Int(1)));
    assert_eq!(run(&program(false)).store.get(&x), Some(&Value::Int(0)));
}

#[test]
fn logical_and_short_circuits() {
    let faulting = BoundExpression::binary(BoundExpression::binary(int(1), DIV, int(0)), EQUALS, int(0));
    let program = [BoundStatement::Expression(BoundExpression::binary(
        BoundExpression::Literal(Value::Bool(false)),
        AND,
        faulting,
    ))];
    assert_eq!(run(&program).result, Ok(Some(Value::Bool(false))));
}

#[test]
fn fault_keeps_earlier_writes() {
    let a = VariableSymbol::new("a", false, TypeSymbol::Int);
    let program = [
        BoundStatement::declaration(a.clone(), int(1)),
        BoundStatement::Expression(BoundExpression::assignment(
            a.clone(),
            BoundExpression::binary(int(1), DIV, int(0)),
        )),
    ];
    let run = run(&program);
    assert_eq!(run.result, Err(EvalError::DivisionByZero));
    assert_eq!(run.store.get(&a), Some(&Value::Int(1)));
}

#[test]
fn void_call_clears_last_value() {
    let print = FunctionSymbol::new(
        "print",
        vec![ParameterSymbol::new("text", TypeSymbol::String)],
        TypeSymbol::Void,
        BuiltinFunction::Print,
    );
    let program = [
        BoundStatement::Expression(int(4)),
        BoundStatement::Expression(BoundExpression::Call {
            function: print,
            arguments: vec![BoundExpression::conversion(TypeSymbol::String, int(4))],
        }),
    ];
    let run = run(&program);
    assert_eq!(run.result, Ok(None));
    assert_eq!(run.output, "4\n");
}

#[test]
fn reading_undeclared_value_faults() {
    let z = VariableSymbol::new("z", false, TypeSymbol::Int);
    let run = run(&[BoundStatement::Expression(var(&z))]);
    assert_eq!(run.result, Err(EvalError::Unassigned { name: "z".into() }));
}

#[test]
#[should_panic(expected = "while statement reached the evaluator unlowered")]
fn structured_statements_are_rejected() {
    run(&[BoundStatement::While {
        condition: BoundExpression::Literal(Value::Bool(false)),
        body: Box::new(BoundStatement::Block(Vec::new())),
    }]);
}
