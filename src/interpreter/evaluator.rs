/// Binary operator evaluation.
///
/// Integer arithmetic and comparison, equality on every other kind, string
/// concatenation, and the type-mismatch and unknown-operator failures.
pub mod binary;
/// The builtin function table and the host functions behind it.
pub mod builtin;
/// The tree walk itself.
///
/// Evaluates programs, blocks, and statements, resolves identifiers through
/// the environment chain, builds closures, and applies calls.
pub mod core;
/// Prefix operator evaluation: logical NOT and integer negation.
pub mod unary;
