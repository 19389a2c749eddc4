/// Core machinery of the Pratt parser: the parser state, the precedence
/// ladder, and the expression-parsing loop that drives prefix and infix
/// rules.
pub mod core;
/// Infix rules.
///
/// Left-associative binary operators and the call rule that fires on a
/// postfix `(`.
pub mod infix;
/// Prefix rules.
///
/// Everything an expression can start with: literals, identifiers, unary
/// operators, grouped expressions, `if`, and function literals.
pub mod prefix;
/// Statement rules: `let`, `return`, expression statements, and blocks.
pub mod statement;

pub use self::core::{Parser, Precedence};
