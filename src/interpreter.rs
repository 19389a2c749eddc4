/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, resolves names
/// through environments, applies operators and calls, and produces runtime
/// values. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates programs, blocks, statements, and expressions.
/// - Builds closures and applies user functions and builtins.
/// - Reports runtime errors such as type mismatches or unknown identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator, delimiter, or keyword. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into kind/literal token pairs.
/// - Handles integer and string literals, identifiers, and keywords.
/// - Flags unrecognized bytes as `ILLEGAL` rather than failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt (operator-precedence) parser: expression parsing
/// is driven by per-token prefix and infix rules ordered by a precedence
/// ladder. Errors are accumulated, never thrown, so one bad statement does
/// not hide the rest of the input.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves operator precedence and associativity.
/// - Records readable messages for every construct it cannot parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value variants used during execution (integers,
/// booleans, strings, null, functions, builtins) along with their canonical
/// kind tags and inspect forms, and the environment type that gives the
/// language its lexical scoping.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, operator-level equality, and display.
/// - Provides the shared environment chain captured by closures.
pub mod value;
