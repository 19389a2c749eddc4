use monna::{
    interpreter::value::{core::Value, environment::Environment},
    run_source,
};
use walkdir::WalkDir;

fn eval(source: &str) -> Option<Value> {
    let env = Environment::global();
    match run_source(source, &env) {
        Ok(value) => value,
        Err(e) => panic!("script failed: {source:?}: {e}"),
    }
}

fn eval_error(source: &str) -> String {
    let env = Environment::global();
    match run_source(source, &env) {
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
        Err(e) => e.to_string(),
    }
}

fn assert_integer(source: &str, expected: i64) {
    assert_eq!(eval(source), Some(Value::Integer(expected)), "source: {source}");
}

fn assert_bool(source: &str, expected: bool) {
    assert_eq!(eval(source), Some(Value::Bool(expected)), "source: {source}");
}

fn assert_null(source: &str) {
    assert_eq!(eval(source), Some(Value::Null), "source: {source}");
}

#[test]
fn integer_arithmetic() {
    assert_integer("5", 5);
    assert_integer("10", 10);
    assert_integer("-5", -5);
    assert_integer("-10", -10);
    assert_integer("5 + 5 + 5 + 5 - 10", 10);
    assert_integer("2 * 2 * 2 * 2 * 2", 32);
    assert_integer("-50 + 100 + -50", 0);
    assert_integer("5 * 2 + 10", 20);
    assert_integer("5 + 2 * 10", 25);
    assert_integer("20 + 2 * -10", 0);
    assert_integer("50 / 2 * 2 + 10", 60);
    assert_integer("2 * (5 + 10)", 30);
    assert_integer("3 * 3 * 3 + 10", 37);
    assert_integer("3 * (3 * 3) + 10", 37);
    assert_integer("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50);
}

#[test]
fn division_truncates_toward_zero() {
    assert_integer("7 / 2", 3);
    assert_integer("-7 / 2", -3);
}

#[test]
fn integer_arithmetic_wraps() {
    assert_integer("9223372036854775807 + 1", i64::MIN);
}

#[test]
fn boolean_expressions() {
    assert_bool("true", true);
    assert_bool("false", false);
    assert_bool("1 < 2", true);
    assert_bool("1 > 2", false);
    assert_bool("1 == 1", true);
    assert_bool("1 != 1", false);
    assert_bool("1 != 2", true);
    assert_bool("true == true", true);
    assert_bool("false == false", true);
    assert_bool("true != false", true);
    assert_bool("(1 < 2) == true", true);
    assert_bool("(1 < 2) == false", false);
    assert_bool("(1 > 2) == false", true);
}

#[test]
fn equality_across_kinds_is_false_not_an_error() {
    assert_bool("5 == true", false);
    assert_bool("5 != true", true);
}

#[test]
fn bang_operator() {
    assert_bool("!true", false);
    assert_bool("!false", true);
    assert_bool("!5", false);
    assert_bool("!!true", true);
    assert_bool("!!false", false);
    assert_bool("!!5", true);
}

#[test]
fn if_else_expressions() {
    assert_integer("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_integer("if (1) { 10 }", 10);
    assert_integer("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_integer("if (1 > 2) { 10 } else { 20 }", 20);
    assert_integer("if (1 < 2) { 10 } else { 20 }", 10);
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert_integer("if (0) { 1 } else { 2 }", 1);
    assert_integer(r#"if ("") { 1 } else { 2 }"#, 1);
}

#[test]
fn return_statements_exit_early() {
    assert_integer("return 10;", 10);
    assert_integer("return 10; 9;", 10);
    assert_integer("return 2 * 5; 9;", 10);
    assert_integer("9; return 2 * 5; 9;", 10);
}

#[test]
fn return_bubbles_through_nested_blocks() {
    assert_integer("if (10 > 1) {\n  if (10 > 1) {\n    return 10;\n  }\n  return 1;\n}",
                   10);
}

#[test]
fn let_bindings() {
    assert_integer("let a = 5; a;", 5);
    assert_integer("let a = 5 * 5; a;", 25);
    assert_integer("let a = 5; let b = a; b;", 5);
    assert_integer("let a = 5; let b = a; let c = a + b + 5; c;", 15);
}

#[test]
fn a_lone_let_produces_no_value() {
    assert_eq!(eval("let a = 5;"), None);
}

#[test]
fn function_application() {
    assert_integer("let identity = fn(x) { x; }; identity(5);", 5);
    assert_integer("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_integer("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_integer("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_integer("fn(x) { x; }(5)", 5);
}

#[test]
fn function_inspect_form() {
    let Some(value) = eval("fn(x) { x + 2; };") else {
        panic!("expected a function value");
    };

    assert_eq!(value.kind(), "FUNCTION");
    assert_eq!(value.to_string(), "fn(x) {\n(x + 2)\n}");
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_integer("let newAdder = fn(x) { fn(y) { x + y } };\n\
                    let addTwo = newAdder(2);\n\
                    addTwo(2);",
                   4);
}

#[test]
fn parameters_shadow_without_clobbering_outer_bindings() {
    let env = Environment::global();
    run_source("let x = 5; let f = fn(x) { x };", &env).unwrap();

    assert_eq!(run_source("f(10)", &env).unwrap(), Some(Value::Integer(10)));
    assert_eq!(run_source("x", &env).unwrap(), Some(Value::Integer(5)));
}

#[test]
fn recursion_through_the_global_binding() {
    assert_integer("let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) };\n\
                    fib(10);",
                   55);
}

#[test]
fn string_literals_and_concatenation() {
    assert_eq!(eval(r#""Hello World!""#), Some(Value::Str("Hello World!".to_string())));
    assert_eq!(eval(r#""Hello" + " " + "World!""#),
               Some(Value::Str("Hello World!".to_string())));
}

#[test]
fn string_equality_is_by_contents() {
    assert_bool(r#""a" == "a""#, true);
    assert_bool(r#""a" == "b""#, false);
    assert_bool(r#""a" != "b""#, true);
}

#[test]
fn len_builtin() {
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("four")"#, 4);
    assert_integer(r#"len("hello world")"#, 11);
}

#[test]
fn puts_builtin_produces_null() {
    assert_null(r#"puts("hello", 42)"#);
}

#[test]
fn builtins_can_be_shadowed_by_let() {
    assert_integer("let len = fn(x) { 99 }; len(\"abc\")", 99);
}

#[test]
fn every_builtin_resolves_by_name() {
    use monna::interpreter::evaluator::builtin::{lookup, BUILTIN_NAMES};

    for name in BUILTIN_NAMES {
        assert!(lookup(name).is_some(), "builtin {name} missing from table");
    }
    assert!(lookup("nope").is_none());
}

#[test]
fn error_surface() {
    let cases = [("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
                 ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
                 ("-true", "unknown operator: -BOOLEAN"),
                 ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN"),
                 ("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                  "unknown operator: BOOLEAN + BOOLEAN"),
                 ("foobar", "identifier not found: foobar"),
                 (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
                 (r#"len(1)"#, "argument to `len` not supported, got INTEGER"),
                 (r#"len("a", "b")"#, "wrong number of arguments, got=2, want=1"),
                 ("let x = 5; x(1);", "not a function: INTEGER"),
                 ("let f = fn(x) { x }; f(1, 2);", "wrong number of arguments, got=2, want=1"),
                 ("5 / 0", "division by zero")];

    for (source, expected) in cases {
        assert_eq!(eval_error(source), expected, "source: {source}");
    }
}

#[test]
fn an_error_stops_later_statements() {
    // The binding never happens because evaluation aborts first.
    let env = Environment::global();
    assert!(run_source("foobar; let a = 1;", &env).is_err());
    assert!(run_source("a", &env).is_err());
}

#[test]
fn repl_session_keeps_bindings_and_reports_errors() {
    let mut input = std::io::Cursor::new("let a = 2;\na + 3\nfoo\nlet x 5\n");
    let mut output = Vec::new();

    monna::repl::start(&mut input, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("5\n"), "output: {output:?}");
    assert!(output.contains("ERROR: identifier not found: foo"));
    assert!(output.contains("\texpected next token to be ASSIGN, got INT\n"));
}

#[test]
fn example_scripts_run_cleanly() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "monna")
                                     })
    {
        count += 1;
        let path = entry.path();
        let source =
            std::fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path:?}: {e}"));

        let env = Environment::global();
        if let Err(e) = run_source(&source, &env) {
            panic!("script {path:?} failed:\n{source}\nError: {e}");
        }
    }

    assert!(count > 0, "no example scripts found in tests/scripts");
}
