//! # monna
//!
//! Monna is a small, dynamically typed, expression oriented scripting
//! language interpreted by walking its syntax tree. The crate exposes the
//! full pipeline (lexer, Pratt parser, evaluator) along with a line-based
//! REPL; programs get integers, booleans, strings, `let` bindings,
//! conditionals, and first-class functions with lexically scoped closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::Parser,
    value::{
        core::Value,
        environment::{Env, Environment},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree, together with the
/// operator enums and the canonical pretty-printed form of every node. The
/// AST is built by the parser and traversed read-only by the evaluator.
pub mod ast;
/// Provides the two error channels of the interpreter.
///
/// Parse errors accumulate on the parser and describe what could not be
/// turned into a tree; runtime errors abort evaluation and describe what
/// the tree could not do. Both render the exact messages the language
/// promises.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, and the value
/// representations to provide a complete runtime for Monna source code.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;

/// Parses and evaluates source text against an existing environment.
///
/// Bindings created by the source land in `env`, so consecutive calls with
/// the same environment see each other's `let` statements. Parse errors are
/// reported before anything is evaluated.
///
/// # Errors
/// The first parse error when the source does not parse, otherwise the
/// runtime error that aborted evaluation.
///
/// # Examples
/// ```
/// use monna::{
///     interpreter::value::{core::Value, environment::Environment},
///     run_source,
/// };
///
/// let env = Environment::global();
/// run_source("let a = 5;", &env).unwrap();
///
/// let result = run_source("a + a", &env).unwrap();
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub fn run_source(source: &str, env: &Env) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if let Some(error) = parser.errors().first() {
        return Err(Box::new(error.clone()));
    }

    eval_program(&program, env).map_err(Into::into)
}

/// Runs a standalone script in a fresh environment.
///
/// This is the entry point behind the `monna` binary's script mode. When
/// `auto_print` is set, the value of the last value-producing statement is
/// printed to standard output after the script finishes.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use monna::get_result;
///
/// // The final value is "Hello, World!"; no error occurs.
/// let source = r#"let greeting = "Hello" + ", " + "World!"; greeting"#;
/// assert!(get_result(source, false).is_ok());
///
/// // 'foobar' is not bound to anything.
/// assert!(get_result("foobar", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env = Environment::global();
    let result = run_source(source, &env)?;

    if auto_print && let Some(value) = result {
        println!("{value}");
    }

    Ok(())
}
