use monna::{
    ast::{Expression, Program, Statement},
    interpreter::{lexer::Lexer, parser::Parser},
};

fn parse(source: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "unexpected parse errors for {source:?}: {:?}",
            parser.errors());
    program
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn let_statements() {
    let program = parse("let x = 5;\nlet y = true;\nlet foobar = y;");

    assert_eq!(program.statements.len(), 3);
    assert_eq!(program.to_string(), "let x = 5;let y = true;let foobar = y;");
}

#[test]
fn return_statements() {
    let program = parse("return 5;\nreturn x + y;");

    assert_eq!(program.to_string(), "return 5;return (x + y);");
}

#[test]
fn operator_precedence_pretty_printing() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input: {input}");
    }
}

#[test]
fn canonical_form_reparses_to_itself() {
    // The pretty-printed form of an operator expression is fully
    // parenthesized, so parsing it again must print the same text.
    let sources = ["-a * b",
                   "!-a",
                   "a + b * c + d / e - f",
                   "3 > 5 == false",
                   "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))"];

    for source in sources {
        let printed = parse(source).to_string();
        assert_eq!(parse(&printed).to_string(), printed, "source: {source}");
    }
}

#[test]
fn if_expression_structure() {
    let program = parse("if (x < y) { x } else { y }");
    assert_eq!(program.statements.len(), 1);

    let Statement::Expression { expression: Expression::If { condition,
                                                             consequence,
                                                             alternative, }, } =
        &program.statements[0]
    else {
        panic!("expected an if expression, got {:?}", program.statements[0]);
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.to_string(), "x");
    assert_eq!(alternative.as_ref().map(ToString::to_string), Some("y".to_string()));
}

#[test]
fn if_without_else_has_no_alternative() {
    let program = parse("if (x) { 1 }");

    let Statement::Expression { expression: Expression::If { alternative, .. } } =
        &program.statements[0]
    else {
        panic!("expected an if expression, got {:?}", program.statements[0]);
    };

    assert!(alternative.is_none());
}

#[test]
fn function_literal_parameters() {
    let cases: [(&str, &[&str]); 3] = [("fn() {};", &[]),
                                       ("fn(x) {};", &["x"]),
                                       ("fn(x, y, z) {};", &["x", "y", "z"])];

    for (input, expected) in cases {
        let program = parse(input);
        let Statement::Expression { expression: Expression::FunctionLiteral { parameters, .. } } =
            &program.statements[0]
        else {
            panic!("expected a function literal, got {:?}", program.statements[0]);
        };

        assert_eq!(parameters, expected, "input: {input}");
    }
}

#[test]
fn function_literal_body() {
    let program = parse("fn(x, y) { x + y; }");

    assert_eq!(program.to_string(), "fn(x, y) (x + y)");
}

#[test]
fn call_expression_structure() {
    let program = parse("add(1, 2 * 3, 4 + 5);");

    let Statement::Expression { expression: Expression::Call { function, arguments } } =
        &program.statements[0]
    else {
        panic!("expected a call expression, got {:?}", program.statements[0]);
    };

    assert_eq!(function.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
}

#[test]
fn string_literals_keep_their_contents() {
    let program = parse(r#""hello world";"#);

    assert_eq!(program.statements[0],
               Statement::Expression { expression:
                                           Expression::StringLiteral("hello world".to_string()), });
}

#[test]
fn missing_assign_is_recorded_and_parsing_continues() {
    assert_eq!(parse_errors("let x 5;"),
               ["expected next token to be ASSIGN, got INT"]);
}

#[test]
fn cascading_let_errors() {
    // The bad `let` produces one error, then the statement loop resumes at
    // the `=` token, which has no prefix rule of its own.
    assert_eq!(parse_errors("let = 5;"),
               ["expected next token to be IDENT, got ASSIGN",
                "no prefix parse function for ASSIGN found"]);
}

#[test]
fn oversized_integer_literal_is_an_error() {
    assert_eq!(parse_errors("9223372036854775808"),
               ["could not parse 9223372036854775808 as integer"]);
}

#[test]
fn illegal_token_has_no_prefix_rule() {
    assert_eq!(parse_errors("@"), ["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn errors_do_not_hide_later_statements() {
    let mut parser = Parser::new(Lexer::new("let x 5; let y = 7;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert!(program.to_string().contains("let y = 7;"));
}
