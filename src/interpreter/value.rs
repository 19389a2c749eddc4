/// Runtime value representation.
///
/// Declares the `Value` enum covering every kind a Monna expression can
/// produce, the canonical kind tags used in error messages, and the inspect
/// forms shown by the REPL and `puts`.
pub mod core;
/// Lexical scope chains.
///
/// An environment maps names to values and optionally points at the
/// enclosing environment, forming the chain that identifier lookup walks
/// and that closures capture.
pub mod environment;
