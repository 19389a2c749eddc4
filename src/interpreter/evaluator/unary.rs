use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an already-evaluated operand.
///
/// `!` negates truthiness and is defined for every kind: `!true` and
/// `!null` are the only inputs that produce `true`; any other value,
/// integers included, produces `false`. `-` is defined for integers only
/// and wraps on overflow, so `-(i64::MIN)` stays `i64::MIN`.
///
/// # Errors
/// [`RuntimeError::UnknownPrefixOperator`] when `-` is applied to a
/// non-integer.
pub(crate) fn eval_unary(operator: UnaryOperator, right: &Value) -> EvalResult<Value> {
    match operator {
        UnaryOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        UnaryOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            other => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                               right: other.kind() }),
        },
    }
}
