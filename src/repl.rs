//! The interactive read-eval-print loop.
//!
//! Reads one line at a time, parses and evaluates it against a single
//! environment that lives for the whole session, and prints either the
//! produced value's inspect form, the accumulated parse errors, or the
//! runtime error message.

use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::Parser,
    value::environment::Environment,
};

/// The prompt printed before each line is read.
pub const PROMPT: &str = ">> ";

const PARSE_ERROR_BANNER: &str = "Woops! I ran into some monna business here!\n parser errors:";

/// Drives the loop until `input` runs out of lines.
///
/// Bindings accumulate across lines: a `let` on one line is visible on
/// every later one. Lines that produce no value (a lone `let`) print
/// nothing. Language-level problems are printed and the loop keeps going;
/// a line that fails to parse prints every recorded message, one per
/// tab-indented line, under a short banner.
///
/// # Errors
/// Only I/O failures on `input` or `output`.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Environment::global();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            writeln!(output, "{PARSE_ERROR_BANNER}")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
