use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the already-evaluated argument values and returns the
/// call's result wrapped in `EvalResult`.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means any number of arguments is accepted.
#[derive(Debug, Clone, Copy)]
enum Arity {
    Exact(usize),
    Variadic,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the public handle stored in `Value::Builtin`),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_NAMES` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A host function callable from Monna programs.
        #[derive(Debug)]
        pub struct BuiltinDef {
            /// The name programs call the builtin by.
            pub name: &'static str,
            arity:    Arity,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every builtin name, in table order.
        pub const BUILTIN_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"  => { arity: Arity::Exact(1), func: len },
    "puts" => { arity: Arity::Variadic, func: puts },
}

/// Finds a builtin by name.
///
/// Builtins are consulted only after the environment chain misses, so a
/// `let` binding may shadow any of them.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}

impl BuiltinDef {
    /// Checks arity and invokes the host function.
    ///
    /// # Errors
    /// [`RuntimeError::WrongArgumentCount`] when an exact-arity builtin
    /// receives the wrong number of arguments, plus whatever the host
    /// function itself rejects.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if let Arity::Exact(want) = self.arity
           && args.len() != want
        {
            return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                          want });
        }
        (self.func)(args)
    }
}

/// Returns the length of its single argument as an integer.
///
/// Strings report their length in bytes. Every other kind is rejected.
#[allow(clippy::cast_possible_wrap)]
fn len(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Str(value) => Ok(Value::Integer(value.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                         kind:    other.kind(), }),
    }
}

/// Prints each argument's inspect form on its own line to standard output.
#[allow(clippy::unnecessary_wraps)]
fn puts(args: &[Value]) -> EvalResult<Value> {
    for argument in args {
        println!("{argument}");
    }
    Ok(Value::Null)
}
