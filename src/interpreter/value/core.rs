use std::rc::Rc;

use crate::{
    ast::BlockStatement,
    interpreter::{evaluator::builtin::BuiltinDef, value::environment::Env},
};

/// A user-defined function value.
///
/// Created by evaluating a function literal. The environment in effect at
/// that moment is captured by reference, which is what makes the function a
/// closure: the body is later evaluated against a fresh frame enclosing
/// `env`, not the caller's environment.
#[derive(Clone)]
pub struct FunctionValue {
    /// Parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       BlockStatement,
    /// The environment captured at the definition site.
    pub env:        Env,
}

// The captured environment can be cyclic (a closure stored in a binding of
// its own capture), so Debug must not descend into it.
impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every kind of value a Monna expression can produce.
/// The `Return` variant never reaches user code: it exists to carry an
/// early exit up through enclosing blocks and is unwrapped exactly once at
/// the nearest function or program boundary.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An immutable string of bytes.
    Str(String),
    /// The absent value, produced by an `if` whose condition fails with no
    /// `else` branch.
    Null,
    /// An in-flight `return`, wrapping the returned value.
    Return(Box<Value>),
    /// A user-defined function together with its captured environment.
    Function(Rc<FunctionValue>),
    /// A host function from the builtin table.
    Builtin(&'static BuiltinDef),
}

impl Value {
    /// The canonical tag naming this value's kind.
    ///
    /// These tags appear verbatim in runtime error messages.
    ///
    /// # Example
    /// ```
    /// use monna::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).kind(), "INTEGER");
    /// assert_eq!(Value::Null.kind(), "NULL");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Bool(_) => "BOOLEAN",
            Self::Str(_) => "STRING",
            Self::Null => "NULL",
            Self::Return(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// Only `false` and `null` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false) | Self::Null)
    }
}

/// Equality as observed by the `==` and `!=` operators.
///
/// Booleans and null compare as the canonical values they are, strings by
/// contents, functions by identity, and values of different kinds are never
/// equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(l), Self::Integer(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Str(l), Self::Str(r)) => l == r,
            (Self::Null, Self::Null) => true,
            (Self::Return(l), Self::Return(r)) => l == r,
            (Self::Function(l), Self::Function(r)) => Rc::ptr_eq(l, r),
            (Self::Builtin(l), Self::Builtin(r)) => std::ptr::eq(*l, *r),
            _ => false,
        }
    }
}

/// The inspect form: what the REPL and `puts` print for each value.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Null => f.write_str("null"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => f.write_str("builtin function"),
        }
    }
}
