use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, unary},
        value::{
            core::{FunctionValue, Value},
            environment::{Env, Environment},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure. The `?` operator is what makes
/// every intermediate error short-circuit the rest of the evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against an environment.
///
/// Statements run in source order. A `return` reaching the top level is
/// unwrapped here, exactly once, so user code never observes the wrapper.
/// The result is the last statement's value; `None` when the program is
/// empty or ends in a statement that produces none, such as a `let`.
///
/// # Errors
/// The first [`RuntimeError`] raised by any statement; nothing after it
/// runs.
///
/// # Example
/// ```
/// use monna::interpreter::{
///     evaluator::core::eval_program,
///     lexer::Lexer,
///     parser::Parser,
///     value::{core::Value, environment::Environment},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let a = 2; a * 3"));
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let env = Environment::global();
/// let result = eval_program(&program, &env).unwrap();
///
/// assert_eq!(result, Some(Value::Integer(6)));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &program.statements {
        match eval_statement(statement, env)? {
            Some(Value::Return(value)) => return Ok(Some(*value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// Unlike [`eval_program`], a `return` is passed along still wrapped. That
/// is what lets a `return` inside a nested `if` bubble through every
/// enclosing block until the nearest function (or program) boundary
/// unwraps it.
fn eval_block(block: &BlockStatement, env: &Env) -> EvalResult<Option<Value>> {
    let mut result = None;

    for statement in &block.statements {
        match eval_statement(statement, env)? {
            Some(value @ Value::Return(_)) => return Ok(Some(value)),
            other => result = other,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// # Returns
/// `Some(Value)` for statements that yield a result, or `None` for a `let`,
/// whose only effect is the binding it creates.
fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Ok(Some(Value::Return(Box::new(value))))
        },
        Statement::Expression { expression } => eval_expression(expression, env).map(Some),
    }
}

/// Evaluates an expression to a value.
///
/// This is the recursive heart of the interpreter: one exhaustive match
/// over the expression variants, each arm either producing a value directly
/// or delegating to the operator, conditional, and call helpers below.
///
/// # Errors
/// Any [`RuntimeError`] raised by the expression or one of its operands.
pub fn eval_expression(expression: &Expression, env: &Env) -> EvalResult<Value> {
    match expression {
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expression::StringLiteral(value) => Ok(Value::Str(value.clone())),
        Expression::Boolean(value) => Ok(Value::Bool(*value)),
        Expression::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_unary(*operator, &right)
        },
        Expression::Infix { left,
                            operator,
                            right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_binary(&left, *operator, &right)
        },
        Expression::If { condition,
                         consequence,
                         alternative, } => {
            eval_if(condition, consequence, alternative.as_ref(), env)
        },
        Expression::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                       body:       body.clone(),
                                                       env:        Rc::clone(env), })))
        },
        Expression::Call { function, arguments } => eval_call(function, arguments, env),
    }
}

/// Resolves a name through the environment chain, then the builtin table.
fn eval_identifier(name: &str, env: &Env) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(def) = builtin::lookup(name) {
        return Ok(Value::Builtin(def));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_owned() })
}

/// Evaluates a conditional expression.
///
/// The taken branch's block value is the expression's value; a block that
/// produced nothing, or a falsy condition with no `else`, yields `null`.
/// A wrapped `return` coming out of the branch is passed through untouched.
fn eval_if(condition: &Expression,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Env)
           -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        Ok(eval_block(consequence, env)?.unwrap_or(Value::Null))
    } else if let Some(alternative) = alternative {
        Ok(eval_block(alternative, env)?.unwrap_or(Value::Null))
    } else {
        Ok(Value::Null)
    }
}

/// Evaluates the callee and arguments, then applies the call.
///
/// Arguments evaluate strictly left to right; the first argument error
/// aborts the call before it is entered.
fn eval_call(function: &Expression, arguments: &[Expression], env: &Env) -> EvalResult<Value> {
    let function = eval_expression(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply_function(&function, args)
}

/// Applies evaluated arguments to a callable value.
///
/// User functions get a fresh frame enclosing their *captured* environment,
/// never the caller's; that frame binds each parameter to its argument and
/// the body runs as a block. A wrapped `return` is unwrapped here, which
/// stops it from unwinding past the function boundary.
fn apply_function(function: &Value, args: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => {
            if args.len() != function.parameters.len() {
                return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                              want: function.parameters.len(), });
            }

            let call_env = Environment::enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                call_env.borrow_mut().set(parameter.clone(), argument);
            }

            match eval_block(&function.body, &call_env)? {
                Some(Value::Return(value)) => Ok(*value),
                Some(value) => Ok(value),
                None => Ok(Value::Null),
            }
        },
        Value::Builtin(def) => def.call(&args),
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}
