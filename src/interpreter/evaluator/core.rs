use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Identifier, Literal, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{
            binary::core::eval_infix, function::builtin, function::core::eval_call,
            unary::eval_prefix,
        },
        value::{core::Value, function::Function},
    },
};

/// Result type used by operators, calls and builtins.
///
/// Either a value of type `T` or the `RuntimeError` that stopped evaluation.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why evaluation left a statement sequence early.
///
/// A `return` travels on the same channel as a runtime error, so every `?`
/// in the evaluator stops the enclosing sequence for both. Function calls
/// catch [`Unwind::Return`]; the program boundary catches both.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A `return` statement carrying its value to the nearest function call.
    Return(Value),
    /// A runtime error.
    Error(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by statement and expression evaluation.
pub type Flow<T> = Result<T, Unwind>;

/// Evaluates a program in `env` and returns its final value.
///
/// This is the public evaluation boundary. A `return` at the top level ends
/// the program with the returned value; a runtime error ends it with
/// `Value::Error`. Bindings made by the program stay in `env`, so evaluating
/// several programs against the same environment behaves like one session.
///
/// # Returns
/// `None` if the program is empty or its last statement is a `let`.
///
/// # Example
/// ```
/// use simian::{
///     evaluate,
///     interpreter::{environment::Environment, value::core::Value},
///     parse,
/// };
///
/// let env = Environment::new();
///
/// let (program, _) = parse("let double = fn(x) { x * 2 };");
/// assert_eq!(evaluate(&program, &env), None);
///
/// let (program, _) = parse("double(21)");
/// assert_eq!(evaluate(&program, &env), Some(Value::Integer(42)));
///
/// let (program, _) = parse("double(true)");
/// let error = evaluate(&program, &env).unwrap();
/// assert_eq!(error.to_string(), "ERROR: type mismatch: BOOLEAN * INTEGER");
/// ```
#[must_use]
pub fn evaluate(program: &Program, env: &Env) -> Option<Value> {
    match eval_program(program, env) {
        Ok(value) => value,
        Err(error) => {
            tracing::debug!(%error, "evaluation stopped");
            Some(Value::Error(error))
        },
    }
}

/// Evaluates top-level statements in order.
///
/// A top-level `return` ends the program with the returned value.
pub fn eval_program(program: &Program, env: &Env) -> EvalResult<Option<Value>> {
    match eval_statements(&program.statements, env) {
        Ok(value) => Ok(value),
        Err(Unwind::Return(value)) => Ok(Some(value)),
        Err(Unwind::Error(error)) => Err(error),
    }
}

/// Evaluates the statements of a block in order.
///
/// A `return` stops the block and keeps unwinding, so enclosing blocks and
/// expressions stop too; only the function call (or the program) catches it.
///
/// # Returns
/// The value of the last statement, or `None` for an empty block or one
/// ending in `let`.
pub fn eval_block(block: &Block, env: &Env) -> Flow<Option<Value>> {
    eval_statements(&block.statements, env)
}

fn eval_statements(statements: &[Statement], env: &Env) -> Flow<Option<Value>> {
    let mut result = None;

    for statement in statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// # Returns
/// `None` for `let`, which binds a name but yields no value.
pub fn eval_statement(statement: &Statement, env: &Env) -> Flow<Option<Value>> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.name.clone(), value);
            Ok(None)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Err(Unwind::Return(value))
        },
        Statement::Expression { expr } => eval_expression(expr, env).map(Some),
        Statement::Block(block) => eval_block(block, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches on the expression variant. Composite
/// expressions evaluate their operands left to right and stop at the first
/// error.
pub fn eval_expression(expr: &Expr, env: &Env) -> Flow<Value> {
    match expr {
        Expr::Literal(literal) => Ok(eval_literal(literal)),
        Expr::Identifier(identifier) => eval_identifier(identifier, env),
        Expr::Prefix { operator, operand } => {
            let operand = eval_expression(operand, env)?;
            eval_prefix(*operator, &operand).map_err(Unwind::from)
        },
        Expr::Infix { operator,
                      left,
                      right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix(*operator, &left, &right).map_err(Unwind::from)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::Call { callee, arguments } => eval_call(callee, arguments, env),
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Integer(n) => Value::Integer(*n),
        Literal::String(s) => Value::from(s.as_str()),
        Literal::Boolean(b) => Value::from(*b),
        Literal::Null => Value::NULL,
    }
}

/// Resolves a name through the scope chain, then the builtin registry.
fn eval_identifier(identifier: &Identifier, env: &Env) -> Flow<Value> {
    if let Some(value) = env.borrow().get(&identifier.name) {
        return Ok(value);
    }

    let builtin = builtin::lookup(&identifier.name).ok_or_else(|| {
                      RuntimeError::IdentifierNotFound { name: identifier.name.clone() }
                  })?;
    Ok(Value::Builtin(builtin))
}

/// Evaluates a conditional. A falsy condition without an `else` block
/// yields `null`, as does a branch that produces no value.
fn eval_if(condition: &Expr,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Env)
           -> Flow<Value> {
    let condition = eval_expression(condition, env)?;

    let branch = if condition.is_truthy() {
        Some(consequence)
    } else {
        alternative
    };

    match branch {
        Some(block) => Ok(eval_block(block, env)?.unwrap_or(Value::NULL)),
        None => Ok(Value::NULL),
    }
}
