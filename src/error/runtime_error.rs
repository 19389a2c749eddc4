use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The rendered messages are part of the language surface: programs observe
/// them through the REPL and tests compare them verbatim.
pub enum RuntimeError {
    /// A binary operator was applied to operands of different kinds.
    TypeMismatch {
        /// Kind tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: BinaryOperator,
        /// Kind tag of the right operand.
        right:    &'static str,
    },
    /// A binary operator is not defined for the (matched) operand kinds.
    UnknownInfixOperator {
        /// Kind tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: BinaryOperator,
        /// Kind tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator is not defined for the operand kind.
    UnknownPrefixOperator {
        /// The operator.
        operator: UnaryOperator,
        /// Kind tag of the operand.
        right:    &'static str,
    },
    /// Looked up a name with no binding and no builtin behind it.
    IdentifierNotFound {
        /// The name that failed to resolve.
        name: String,
    },
    /// Tried to call a value that is not callable.
    NotAFunction {
        /// Kind tag of the value in call position.
        kind: &'static str,
    },
    /// A builtin received an argument of a kind it does not accept.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Kind tag of the rejected argument.
        kind:    &'static str,
    },
    /// A call supplied the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments the call supplied.
        got:  usize,
        /// How many the callee requires.
        want: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },

            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },

            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),

            Self::UnsupportedArgument { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },

            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments, got={got}, want={want}")
            },

            Self::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
