use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, Flow, Unwind, eval_block, eval_expression},
        value::{core::Value, function::Function},
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first and must be a user function or a builtin.
/// Arguments are then evaluated left to right; the first one that fails
/// aborts the call.
///
/// # Parameters
/// - `callee`: Expression producing the function.
/// - `arguments`: Argument expressions, in source order.
/// - `env`: Environment of the call site.
///
/// # Returns
/// The call's result. A `return` inside an argument expression unwinds past
/// the call to the function containing it.
pub fn eval_call(callee: &Expr, arguments: &[Expr], env: &Env) -> Flow<Value> {
    let function = eval_expression(callee, env)?;
    if !matches!(function, Value::Function(_) | Value::Builtin(_)) {
        return Err(RuntimeError::NotAFunction { kind: function.kind() }.into());
    }

    let args = arguments.iter()
                        .map(|argument| eval_expression(argument, env))
                        .collect::<Flow<Vec<_>>>()?;

    apply_function(&function, args).map_err(Unwind::from)
}

/// Applies an evaluated callee to evaluated arguments.
///
/// # Example
/// ```
/// use simian::{
///     interpreter::{
///         environment::Environment, evaluator::function::core::apply_function,
///         value::core::Value,
///     },
///     parse,
/// };
///
/// let env = Environment::new();
/// let (program, _) = parse("let add = fn(a, b) { a + b };");
/// simian::evaluate(&program, &env);
///
/// let add = env.borrow().get("add").unwrap();
/// let sum = apply_function(&add, vec![Value::Integer(2), Value::Integer(3)]).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let err = apply_function(&add, vec![Value::Integer(2)]).unwrap_err();
/// assert_eq!(err.to_string(), "wrong number of arguments: want=2, got=1");
/// ```
pub fn apply_function(function: &Value, args: Vec<Value>) -> EvalResult<Value> {
    match function {
        Value::Function(function) => apply_user_function(function, args),
        Value::Builtin(builtin) => builtin.call(&args),
        other => Err(RuntimeError::NotAFunction { kind: other.kind() }),
    }
}

fn apply_user_function(function: &Function, args: Vec<Value>) -> EvalResult<Value> {
    if function.parameters.len() != args.len() {
        return Err(RuntimeError::ArgumentCountMismatch { expected: function.parameters.len(),
                                                         found:    args.len(), });
    }

    tracing::trace!(parameters = function.parameters.len(), "calling function");

    let env = extend_function_env(function, args);

    match eval_block(&function.body, &env) {
        Ok(value) => Ok(value.unwrap_or(Value::NULL)),
        Err(Unwind::Return(value)) => Ok(value),
        Err(Unwind::Error(error)) => Err(error),
    }
}

/// Creates the call frame: a scope enclosing the captured environment with
/// each parameter bound to its argument.
fn extend_function_env(function: &Function, args: Vec<Value>) -> Env {
    let env = Environment::new_enclosed(&function.env);
    {
        let mut frame = env.borrow_mut();
        for (parameter, arg) in function.parameters.iter().zip(args) {
            frame.set(parameter.name.clone(), arg);
        }
    }
    env
}
