use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a binary operator to two already-evaluated operands.
///
/// Dispatch order matters and is part of the language surface:
/// 1. Two integers go to integer arithmetic and comparison.
/// 2. `==` and `!=` on any other pairing compare the values directly, so
///    mixed kinds are unequal rather than a type error.
/// 3. Operands of different kinds fail with a type mismatch.
/// 4. `+` on two strings concatenates.
/// 5. Everything else is an unknown operator for those kinds.
pub(crate) fn eval_binary(left: &Value,
                          operator: BinaryOperator,
                          right: &Value)
                          -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_binary(*l, operator, *r),

        _ if matches!(operator, BinaryOperator::Equal) => Ok(Value::Bool(left == right)),
        _ if matches!(operator, BinaryOperator::NotEqual) => Ok(Value::Bool(left != right)),

        _ if left.kind() != right.kind() => {
            Err(RuntimeError::TypeMismatch { left: left.kind(),
                                             operator,
                                             right: right.kind() })
        },

        (Value::Str(l), Value::Str(r)) if matches!(operator, BinaryOperator::Add) => {
            Ok(Value::Str(format!("{l}{r}")))
        },

        _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                      operator,
                                                      right: right.kind() }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow (two's complement). Division truncates
/// toward zero; dividing by zero is a runtime error rather than a panic.
fn eval_integer_binary(left: i64, operator: BinaryOperator, right: i64) -> EvalResult<Value> {
    let value = match operator {
        BinaryOperator::Add => Value::Integer(left.wrapping_add(right)),
        BinaryOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        BinaryOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        BinaryOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Value::Integer(left.wrapping_div(right))
        },
        BinaryOperator::Less => Value::Bool(left < right),
        BinaryOperator::Greater => Value::Bool(left > right),
        BinaryOperator::Equal => Value::Bool(left == right),
        BinaryOperator::NotEqual => Value::Bool(left != right),
    };
    Ok(value)
}
