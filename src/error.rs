/// Parsing errors.
///
/// Defines the errors the parser records while turning tokens into a syntax
/// tree. The parser never aborts on these; they accumulate in order and the
/// caller inspects the list before evaluating anything.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a program, such
/// as operator type mismatches, unknown identifiers, or calling something
/// that is not a function. Evaluation stops at the first one.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
