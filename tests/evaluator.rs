use pretty_assertions::assert_eq;
use rstest::rstest;
use simian::{
    error::RuntimeError,
    evaluate,
    interpreter::{
        environment::Environment,
        evaluator::function::builtin::{BUILTIN_FUNCTIONS, lookup},
        value::core::{Value, ValueKind},
    },
    parse,
};

fn run(source: &str) -> Option<Value> {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:#?}");
    evaluate(&program, &Environment::new())
}

fn inspect(source: &str) -> String {
    run(source).map_or_else(|| "<none>".to_string(), |value| value.to_string())
}

#[rstest]
#[case("5", "5")]
#[case("-10", "-10")]
#[case("5 + 5 + 5 + 5 - 10", "10")]
#[case("2 * 2 * 2 * 2 * 2", "32")]
#[case("-50 + 100 + -50", "0")]
#[case("20 + 2 * -10", "0")]
#[case("50 / 2 * 2 + 10", "60")]
#[case("3 * (3 * 3) + 10", "37")]
#[case("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50")]
#[case("1 < 2", "true")]
#[case("1 > 2", "false")]
#[case("1 == 1", "true")]
#[case("1 != 1", "false")]
#[case("(1 < 2) == true", "true")]
#[case("(1 > 2) == true", "false")]
#[case("true == false", "false")]
#[case("null != null", "false")]
#[case("!true", "false")]
#[case("!!true", "true")]
#[case("!null", "true")]
#[case(r#""Hello" + " " + "World!""#, "Hello World!")]
#[case("if (1) { 10 }", "10")]
#[case("if (1 > 2) { 10 }", "null")]
#[case("null", "null")]
#[case("fn(x) { x + 2; }", "fn(x) { (x + 2) }")]
#[case("len", "builtin function len")]
#[case("let x = 1;", "<none>")]
fn values_render_as_expected(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(inspect(source), expected);
}

#[rstest]
#[case("5 + true;", "type mismatch: INTEGER + BOOLEAN")]
#[case("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN")]
#[case("-true", "unknown operator: -BOOLEAN")]
#[case("-\"a\"", "unknown operator: -STRING")]
#[case("true + false;", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("null < null", "unknown operator: NULL < NULL")]
#[case("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN")]
#[case("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
       "unknown operator: BOOLEAN + BOOLEAN")]
#[case(r#""Hello" - "World""#, "unknown operator: STRING - STRING")]
#[case("true == 1", "type mismatch: BOOLEAN == INTEGER")]
#[case("null == false", "type mismatch: NULL == BOOLEAN")]
#[case("foobar", "identifier not found: foobar")]
#[case("1 / 0", "division by zero: 1 / 0")]
#[case("true()", "not a function: BOOLEAN")]
#[case("\"f\"(1)", "not a function: STRING")]
#[case("fn(a) { a }()", "wrong number of arguments: want=1, got=0")]
#[case("fn() { 1 }(2)", "wrong number of arguments: want=0, got=1")]
#[case("len()", "wrong number of arguments: want=1, got=0")]
#[case("len(true)", "argument to `len` not supported, got BOOLEAN")]
fn errors_become_error_values(#[case] source: &str, #[case] message: &str) {
    match run(source) {
        Some(Value::Error(error)) => assert_eq!(error.to_string(), message),
        other => panic!("expected an error for {source:?}, got {other:?}"),
    }
}

#[test]
fn error_values_render_with_prefix() {
    assert_eq!(inspect("missing"), "ERROR: identifier not found: missing");
}

#[test]
fn error_carries_structured_cause() {
    assert_eq!(run("1 + \"a\""),
               Some(Value::Error(RuntimeError::TypeMismatch { left:     ValueKind::Integer,
                                                              operator: simian::ast::InfixOperator::Add,
                                                              right:    ValueKind::String, })));
}

#[test]
fn return_is_never_a_value() {
    assert_eq!(run("let f = fn() { let r = if (true) { return 1; }; r + 1 }; f()"),
               Some(Value::Integer(1)));
    assert_eq!(inspect("let f = fn(x) { x }; f(fn() { return 5; }())"), "5");
}

#[test]
fn callee_is_checked_before_arguments() {
    assert_eq!(inspect("5(missing)"), "ERROR: not a function: INTEGER");
}

#[test]
fn arguments_are_evaluated_left_to_right() {
    assert_eq!(inspect("let f = fn(a, b) { a }; f(first, second)"),
               "ERROR: identifier not found: first");
}

#[test]
fn return_value_is_unwrapped_at_boundaries() {
    assert_eq!(run("return 5;"), Some(Value::Integer(5)));
    assert_eq!(run("let f = fn() { return 5; }; f()"), Some(Value::Integer(5)));
    assert_eq!(run("let f = fn() { }; f()"), Some(Value::NULL));
    assert_eq!(run("let f = fn() { let a = 1; }; f()"), Some(Value::NULL));
}

#[test]
fn environment_bindings_survive_between_programs() {
    let env = Environment::new();

    let (program, _) = parse("let a = 5; let b = a * 2;");
    assert_eq!(evaluate(&program, &env), None);
    assert!(env.borrow().contains_local("a"));
    assert_eq!(env.borrow().get("b"), Some(Value::Integer(10)));

    let (program, _) = parse("let a = 7; a + b");
    assert_eq!(evaluate(&program, &env), Some(Value::Integer(17)));
}

#[test]
fn function_calls_do_not_write_to_outer_scope() {
    let env = Environment::new();
    let (program, _) = parse("let x = 1; let f = fn(x) { let y = x; y }; f(2);");

    assert_eq!(evaluate(&program, &env), Some(Value::Integer(2)));
    assert_eq!(env.borrow().get("x"), Some(Value::Integer(1)));
    assert!(!env.borrow().contains_local("y"));
}

#[test]
fn closures_capture_their_defining_scope() {
    let env = Environment::new();
    let (program, _) = parse("let counter = fn(start) { fn() { start } }; let c = counter(3);");
    let _ = evaluate(&program, &env);

    let Some(Value::Function(closure)) = env.borrow().get("c") else {
        panic!("c is not a function");
    };
    assert_eq!(closure.env.borrow().get("start"), Some(Value::Integer(3)));
    assert!(!env.borrow().contains_local("start"));
}

#[test]
fn function_equality_is_identity() {
    assert_eq!(inspect("let f = fn() { 1 }; let g = f; f == g"), "true");
    assert_eq!(inspect("fn() { 1 } == fn() { 1 }"), "false");
    assert_eq!(inspect("len == len"), "true");
}

#[test]
fn builtin_registry() {
    assert_eq!(BUILTIN_FUNCTIONS, &["len", "println"]);
    assert!(lookup("len").is_some());
    assert!(lookup("puts").is_none());

    let println = lookup("println").unwrap();
    assert_eq!(println.call(&[]), Ok(Value::NULL));
    assert_eq!(println.call(&[Value::from("x"), Value::Integer(1), Value::TRUE]),
               Ok(Value::NULL));
    assert_eq!(println.call(&[Value::NULL]),
               Err(RuntimeError::UnsupportedArgument { builtin: "println",
                                                       kind:    ValueKind::Null, }));
}

#[test]
fn len_counts_bytes() {
    assert_eq!(run("len(\"hello world\")"), Some(Value::Integer(11)));
    assert_eq!(run("len(\"héllo\")"), Some(Value::Integer(6)));
}

#[test]
fn user_bindings_shadow_builtins() {
    assert_eq!(inspect("let len = 3; len"), "3");
    assert_eq!(inspect("let f = fn(len) { len + 1 }; f(1)"), "2");
}

#[test]
fn recursion_through_the_defining_scope() {
    let source = "let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) }; fib(20)";
    assert_eq!(run(source), Some(Value::Integer(6765)));
}

#[test]
fn wrapping_arithmetic() {
    assert_eq!(run("9223372036854775807 * 2"), Some(Value::Integer(-2)));
    assert_eq!(run("-9223372036854775807 - 2"), Some(Value::Integer(i64::MAX)));
}
